//! Listener settings loaded via OrthoConfig.
//!
//! Values come from `--host`/`--port`, `FITNESS_HOST`/`FITNESS_PORT`, or a
//! configuration file, in the usual OrthoConfig precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the HTTP listener binds to.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FITNESS")]
pub struct ServerSettings {
    /// Interface to bind; every interface by default.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
}

impl ServerSettings {
    /// Host and port pair accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("fitness-tracker"))
            .chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_bind_every_interface_on_5000() {
        let _guard = lock_env([
            ("FITNESS_HOST", None::<String>),
            ("FITNESS_PORT", None::<String>),
        ]);

        let settings = load_from(&[]);
        assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 5000));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FITNESS_HOST", Some("127.0.0.1".to_owned())),
            ("FITNESS_PORT", Some("8081".to_owned())),
        ]);

        let settings = load_from(&[]);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8081);
    }

    #[rstest]
    fn command_line_beats_environment() {
        let _guard = lock_env([
            ("FITNESS_HOST", None::<String>),
            ("FITNESS_PORT", Some("8081".to_owned())),
        ]);

        let settings = load_from(&["--port", "9090"]);
        assert_eq!(settings.port, 9090);
    }
}
