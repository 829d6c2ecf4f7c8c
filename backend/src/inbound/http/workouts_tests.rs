//! Tests for the JSON workout API.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockWorkoutLog;
use crate::inbound::http::render::NOT_FOUND_BODY;
use crate::inbound::http::test_utils::{memory_log, state_for, test_app};

async fn post_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    body: &str,
) -> (StatusCode, Value) {
    let req = actix_test::TestRequest::post()
        .uri("/api/workouts")
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned())
        .to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[actix_web::test]
async fn fresh_store_lists_nothing() {
    let app = actix_test::init_service(test_app(memory_log())).await;
    let req = actix_test::TestRequest::get().uri("/api/workouts").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": true, "workouts": [], "total_count": 0})
    );
}

#[actix_web::test]
async fn created_workout_is_returned_and_listed() {
    let app = actix_test::init_service(test_app(memory_log())).await;

    let (status, body) = post_json(&app, r#"{"workout_name":"Deadlifts","duration":40}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Deadlifts added successfully!"));
    assert_eq!(body["workout"]["id"], json!(1));
    assert_eq!(body["workout"]["workout"], json!("Deadlifts"));
    assert_eq!(body["workout"]["duration"], json!(40));
    assert!(body["workout"]["date_added"].is_string());

    let req = actix_test::TestRequest::get().uri("/api/workouts").to_request();
    let listed: WorkoutListResponse =
        actix_test::read_body_json(actix_test::call_service(&app, req).await).await;
    assert!(listed.success);
    assert_eq!(listed.total_count, 1);
    assert_eq!(listed.workouts[0].workout, "Deadlifts");
}

#[actix_web::test]
async fn names_are_trimmed_before_storing() {
    let app = actix_test::init_service(test_app(memory_log())).await;
    let (status, body) = post_json(&app, r#"{"workout_name":"  Squats  ","duration":"25"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Squats added successfully!"));
    assert_eq!(body["workout"]["duration"], json!(25));
}

#[rstest]
#[case("", "No data provided")]
#[case("not json", "No data provided")]
#[case("null", "No data provided")]
#[case("{}", "No data provided")]
#[case("[1]", "No data provided")]
#[case(r#"{"duration":30}"#, "Workout name is required")]
#[case(r#"{"workout_name":"   ","duration":30}"#, "Workout name is required")]
#[case(r#"{"workout_name":42,"duration":30}"#, "Workout name is required")]
#[case(r#"{"workout_name":"Yoga"}"#, "Duration is required")]
#[case(r#"{"workout_name":"Yoga","duration":null}"#, "Duration is required")]
#[case(r#"{"workout_name":"Yoga","duration":0}"#, "Duration is required")]
#[case(r#"{"workout_name":"Yoga","duration":""}"#, "Duration is required")]
#[case(r#"{"workout_name":"Yoga","duration":"thirty"}"#, "Duration must be a valid number")]
#[case(r#"{"workout_name":"Yoga","duration":"12.5"}"#, "Duration must be a valid number")]
#[case(r#"{"workout_name":"Yoga","duration":"   "}"#, "Duration must be a valid number")]
#[case(r#"{"workout_name":"Yoga","duration":[5]}"#, "Duration must be a valid number")]
#[case(r#"{"workout_name":"Yoga","duration":-10}"#, "Duration must be positive")]
#[case(r#"{"workout_name":"Yoga","duration":"-3"}"#, "Duration must be positive")]
#[case(r#"{"workout_name":"Yoga","duration":0.5}"#, "Duration must be positive")]
#[case(
    r#"{"workout_name":"Yoga","duration":"-99999999999999999999"}"#,
    "Duration must be positive"
)]
#[case(
    r#"{"workout_name":"Yoga","duration":"99999999999999999999"}"#,
    "Duration is too large"
)]
#[actix_web::test]
async fn rejected_bodies_report_the_first_failure(#[case] body: &str, #[case] message: &str) {
    let log = memory_log();
    let app = actix_test::init_service(test_app(Arc::clone(&log))).await;

    let (status, response) = post_json(&app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({"success": false, "error": message}));
    assert_eq!(log.count().await.expect("count"), 0);
}

#[rstest]
#[case("30.0", 30)]
#[case("12.5", 12)]
#[case("true", 1)]
#[case(r#"" 45 ""#, 45)]
#[case("5000000000", 5_000_000_000)]
#[case("18446744073709551615", u64::MAX)]
#[actix_web::test]
async fn loosely_typed_durations_are_coerced(#[case] duration: &str, #[case] minutes: u64) {
    let app = actix_test::init_service(test_app(memory_log())).await;
    let body = format!(r#"{{"workout_name":"Rowing","duration":{duration}}}"#);
    let (status, response) = post_json(&app, &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["workout"]["duration"], json!(minutes));
}

#[actix_web::test]
async fn delete_removes_workout_and_names_it() {
    let log = memory_log();
    log.add_workout("Plank", DurationInput::Integer(5))
        .await
        .expect("valid workout");
    let app = actix_test::init_service(test_app(Arc::clone(&log))).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/workouts/1")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "Workout 'Plank' deleted successfully!"})
    );
    assert_eq!(log.count().await.expect("count"), 0);

    let req = actix_test::TestRequest::delete()
        .uri("/api/workouts/1")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/api/workouts/999")]
#[case("/api/workouts/0")]
#[actix_web::test]
async fn deleting_unknown_id_is_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(memory_log())).await;
    let req = actix_test::TestRequest::delete().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"success": false, "error": "Workout not found"}));
}

#[rstest]
#[case("/api/workouts/abc")]
#[case("/api/workouts/-1")]
#[case("/api/workouts/99999999999999999999999")]
#[actix_web::test]
async fn non_integer_ids_fall_through_to_not_found_page(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(memory_log())).await;
    let req = actix_test::TestRequest::delete().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = actix_test::read_body(res).await;
    assert_eq!(body.as_ref(), NOT_FOUND_BODY.as_bytes());
}

fn failing_log() -> MockWorkoutLog {
    let mut log = MockWorkoutLog::new();
    log.expect_add_workout()
        .returning(|_, _| Err(WorkoutLogError::storage("disk on fire")));
    log.expect_list_workouts()
        .returning(|| Err(WorkoutLogError::storage("disk on fire")));
    log
}

#[actix_web::test]
async fn storage_failures_become_internal_errors() {
    let app = actix_test::init_service(
        App::new()
            .app_data(state_for(Arc::new(failing_log())))
            .service(add_workout)
            .service(list_workouts),
    )
    .await;

    let (status, body) = post_json(&app, r#"{"workout_name":"Deadlifts","duration":40}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("disk on fire"));

    let req = actix_test::TestRequest::get().uri("/api/workouts").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[case(json!(true), DurationInput::Integer(1))]
#[case(json!(false), DurationInput::Missing)]
#[case(json!(0.0), DurationInput::Missing)]
#[case(json!([]), DurationInput::Missing)]
#[case(json!({}), DurationInput::Missing)]
#[case(json!({"minutes": 5}), DurationInput::NonNumeric)]
#[case(json!(45), DurationInput::Integer(45))]
#[case(json!(" 45 "), DurationInput::Text(" 45 ".to_owned()))]
#[case(json!("   "), DurationInput::Text("   ".to_owned()))]
#[case(json!(""), DurationInput::Missing)]
#[case(json!(12.5), DurationInput::Decimal(12.5))]
#[case(json!(u64::MAX), DurationInput::Text(u64::MAX.to_string()))]
fn classifies_duration_values(#[case] value: Value, #[case] expected: DurationInput) {
    assert_eq!(classify_duration(Some(&value)), expected);
}

#[test]
fn absent_duration_is_missing() {
    assert_eq!(classify_duration(None), DurationInput::Missing);
}
