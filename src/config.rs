//! Configuration resolved from the process environment.
//!
//! Everything is plain environment variables (optionally via a `.env` file);
//! there is no config-file discovery. The `FLASK_DEBUG`/`VITE_*` names are
//! kept so existing deployment scripts work unchanged against this binary.

use std::path::PathBuf;

use url::Url;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default Vite dev-server origin.
pub const DEFAULT_VITE_DEV_SERVER: &str = "http://localhost:5173";

/// Default upper bound for echoed messages, in characters.
pub const DEFAULT_MAX_ECHO_LENGTH: usize = 200;

/// Errors raised while resolving settings from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Debug mode (`FLASK_DEBUG` or implied by `VITE_DEV`).
    pub debug: bool,
    /// Serve frontend assets from the Vite dev server instead of the
    /// built bundle.
    pub vite_dev: bool,
    /// Origin of the Vite dev server, as configured (trailing slashes are
    /// stripped where the value is used).
    pub vite_dev_server: String,
    /// Upper bound for echoed messages, in characters.
    pub max_echo_length: usize,
    /// Directory served under `/static`; the built bundle lives in its
    /// `dist/` subdirectory.
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            vite_dev: false,
            vite_dev_server: DEFAULT_VITE_DEV_SERVER.to_string(),
            max_echo_length: DEFAULT_MAX_ECHO_LENGTH,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Settings {
    /// Resolve settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env_var("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let max_echo_length = match env_var("MAX_ECHO_LENGTH") {
            Some(raw) => parse_echo_limit(&raw)?,
            None => DEFAULT_MAX_ECHO_LENGTH,
        };

        let vite_dev = env_flag("VITE_DEV");
        let debug = env_flag("FLASK_DEBUG") || vite_dev;
        let vite_dev_server =
            env_var("VITE_DEV_SERVER").unwrap_or_else(|| DEFAULT_VITE_DEV_SERVER.to_string());

        if vite_dev && Url::parse(&vite_dev_server).is_err() {
            tracing::warn!(
                "VITE_DEV_SERVER does not look like a URL: {}",
                vite_dev_server
            );
        }

        Ok(Self {
            host,
            port,
            debug,
            vite_dev,
            vite_dev_server,
            max_echo_length,
            static_dir: PathBuf::from("static"),
        })
    }

    /// Path of the Vite manifest (Vite 5+ location).
    pub fn manifest_path(&self) -> PathBuf {
        self.static_dir.join("dist").join(".vite").join("manifest.json")
    }

    /// Fallback manifest path (pre-Vite-5 builds wrote it at the dist root).
    pub fn manifest_fallback_path(&self) -> PathBuf {
        self.static_dir.join("dist").join("manifest.json")
    }
}

/// Non-empty environment variable, if set.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Boolean environment flag. Truthy forms: `1`, `true`, `yes`, `on`
/// (case-insensitive, no surrounding whitespace).
fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| flag_enabled(&v)).unwrap_or(false)
}

fn flag_enabled(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "PORT",
        value: raw.to_string(),
        expected: "a port number",
    })
}

fn parse_echo_limit(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "MAX_ECHO_LENGTH",
        value: raw.to_string(),
        expected: "a non-negative integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_flags() {
        for raw in ["1", "true", "TRUE", "yes", "Yes", "on", "ON"] {
            assert!(flag_enabled(raw), "{raw:?} should enable the flag");
        }
        for raw in ["", "0", "false", "no", "off", "2", " on", "true "] {
            assert!(!flag_enabled(raw), "{raw:?} should not enable the flag");
        }
    }

    #[test]
    fn port_parsing() {
        assert_eq!(parse_port("5000").unwrap(), 5000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn echo_limit_parsing() {
        assert_eq!(parse_echo_limit("200").unwrap(), 200);
        assert_eq!(parse_echo_limit("0").unwrap(), 0);
        assert!(parse_echo_limit("many").is_err());
        assert!(parse_echo_limit("-5").is_err());
    }

    #[test]
    fn manifest_paths_derive_from_static_dir() {
        let settings = Settings {
            static_dir: PathBuf::from("/srv/app/static"),
            ..Settings::default()
        };
        assert_eq!(
            settings.manifest_path(),
            PathBuf::from("/srv/app/static/dist/.vite/manifest.json")
        );
        assert_eq!(
            settings.manifest_fallback_path(),
            PathBuf::from("/srv/app/static/dist/manifest.json")
        );
    }
}
