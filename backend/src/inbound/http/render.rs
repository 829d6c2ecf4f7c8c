//! HTML rendering for the browser pages.
//!
//! Pages are assembled from small `format!` fragments. Every piece of
//! user-supplied text passes through [`html_escape`] before it is embedded.

use super::flash::FlashMessage;
use crate::domain::{WorkoutRecord, WorkoutStats};

/// Body sent for unknown routes.
pub const NOT_FOUND_BODY: &str = "<p>Not Found</p>";

/// Body sent when a page fails unexpectedly.
pub const SERVER_ERROR_BODY: &str = "<p>Server Error</p>";

const STYLE: &str = r"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }
header { border-bottom: 2px solid #e4572e; margin-bottom: 1.5rem; }
nav a { margin-right: 1rem; }
.flash { padding: 0.5rem 1rem; border-radius: 4px; margin-bottom: 0.5rem; }
.flash-error { background: #fde2e1; color: #8a1c14; }
.flash-success { background: #e1f7e4; color: #1d6b2c; }
.stats { display: flex; gap: 1rem; }
.stat { flex: 1; padding: 1rem; background: #f4f4f4; text-align: center; }
.empty-state { text-align: center; color: #666; }
";

/// Escape the characters that could break out of text or attribute context.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <h1>ACEest Fitness</h1>
        <p>Track Your Workout Journey</p>
        <nav><a href="/">Log a workout</a><a href="/workouts">View workouts</a></nav>
    </header>
    <main>
{body}
    </main>
</body>
</html>"#
    )
}

fn render_flashes(flashes: &[FlashMessage]) -> String {
    flashes
        .iter()
        .map(|flash| {
            format!(
                r#"        <div class="flash flash-{}">{}</div>
"#,
                flash.level.as_str(),
                html_escape(&flash.message)
            )
        })
        .collect()
}

fn render_workout_list(workouts: &[WorkoutRecord]) -> String {
    let items: String = workouts
        .iter()
        .map(|workout| {
            format!(
                r#"            <li class="workout" data-id="{}"><strong>{}</strong> <span>{} minutes</span> <time>{}</time></li>
"#,
                workout.id(),
                html_escape(workout.name().as_ref()),
                workout.duration(),
                workout.date_added()
            )
        })
        .collect();
    format!(
        r#"        <ul class="workouts">
{items}        </ul>
"#
    )
}

fn render_empty_state() -> &'static str {
    r#"        <section class="empty-state">
            <h2>No Workouts Yet!</h2>
            <p>Start your fitness journey by logging your first workout.</p>
        </section>
"#
}

/// Landing page: add form, pending flashes and the recorded workouts.
pub fn render_index(flashes: &[FlashMessage], workouts: &[WorkoutRecord]) -> String {
    let list = if workouts.is_empty() {
        render_empty_state().to_owned()
    } else {
        format!(
            "        <h2>Recent Workouts</h2>\n{}",
            render_workout_list(workouts)
        )
    };
    let body = format!(
        r#"{flashes}        <form method="post" action="/add_workout">
            <label for="workout_name">Workout</label>
            <input id="workout_name" name="workout_name" type="text" required>
            <label for="duration">Duration (minutes)</label>
            <input id="duration" name="duration" type="number" min="1" required>
            <button type="submit">Add Workout</button>
        </form>
{list}"#,
        flashes = render_flashes(flashes),
    );
    layout("ACEest Fitness", &body)
}

/// Summary page: aggregate statistics followed by every workout.
pub fn render_workouts(workouts: &[WorkoutRecord], stats: &WorkoutStats) -> String {
    if workouts.is_empty() {
        return layout("Your Workouts", render_empty_state());
    }
    let average = stats.average_minutes.unwrap_or_default();
    let body = format!(
        r#"        <section class="stats">
            <h2>Your Fitness Stats</h2>
            <div class="stat"><span class="value">{count}</span> Total Workouts</div>
            <div class="stat"><span class="value">{total}</span> Total Minutes</div>
            <div class="stat"><span class="value">{average:.1}</span> Avg Minutes</div>
        </section>
{list}"#,
        count = stats.count,
        total = stats.total_minutes,
        list = render_workout_list(workouts),
    );
    layout("Your Workouts", &body)
}
