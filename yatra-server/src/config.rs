//! Environment-driven server configuration.
//!
//! Loading honors a `.env` file, applies reference defaults for anything
//! unset, and surfaces non-fatal findings as warnings for `main` to log.

use std::time::Duration;

use yatra_core::SimulationConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_API_TOKEN: &str = "yatra-dev-token";

/// Bind address settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Access-control settings for mutations and the push channel.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token required on write endpoints and the push handshake.
    pub api_token: String,
    /// When set, read endpoints require the token too.
    pub protect_reads: bool,
}

/// Full runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub sim: SimulationConfig,
    pub dev_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.into(),
                port: DEFAULT_PORT,
            },
            auth: AuthConfig {
                api_token: DEFAULT_API_TOKEN.into(),
                protect_reads: false,
            },
            sim: SimulationConfig::default(),
            dev_mode: true,
        }
    }
}

/// A non-fatal configuration finding.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

/// Result of a configuration load.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub env_file_loaded: bool,
}

/// Rejected environment values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Loads [`Config`] from the process environment.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = dotenvy::dotenv().is_ok();
        let mut warnings = Vec::new();

        let host = env_string("YATRA_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = env_parsed("YATRA_PORT", DEFAULT_PORT)?;

        let api_token = match env_string("YATRA_API_TOKEN") {
            Some(token) => token,
            None => {
                warnings.push(ConfigWarning {
                    message: "default API token in use".into(),
                    hint: Some("set YATRA_API_TOKEN before exposing the server".into()),
                });
                DEFAULT_API_TOKEN.into()
            }
        };
        let protect_reads = env_bool("YATRA_PROTECT_READS", false)?;
        let dev_mode = env_bool("YATRA_DEV_MODE", true)?;

        let mut sim = SimulationConfig::default();
        sim.tourist_count = env_parsed("YATRA_TOURIST_COUNT", sim.tourist_count)?;
        sim.alert_count = env_parsed("YATRA_ALERT_COUNT", sim.alert_count)?;
        sim.tick_interval = Duration::from_millis(env_parsed(
            "YATRA_TICK_INTERVAL_MS",
            sim.tick_interval.as_millis() as u64,
        )?);
        if sim.alert_count > sim.tourist_count {
            warnings.push(ConfigWarning {
                message: "alert count exceeds tourist count; clamping".into(),
                hint: None,
            });
            sim.alert_count = sim.tourist_count;
        }

        Ok(ConfigLoad {
            config: Config {
                server: ServerConfig { host, port },
                auth: AuthConfig {
                    api_token,
                    protect_reads,
                },
                sim,
                dev_mode,
            },
            warnings,
            env_file_loaded,
        })
    }
}

fn env_string(var: &'static str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn env_parsed<T: std::str::FromStr>(
    var: &'static str,
    default: T,
) -> Result<T, ConfigLoadError> {
    match env_string(var) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigLoadError::InvalidValue { var, value: raw }),
        None => Ok(default),
    }
}

fn env_bool(var: &'static str, default: bool) -> Result<bool, ConfigLoadError> {
    match env_string(var) {
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigLoadError::InvalidValue { var, value: raw }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: tests run in isolation and restore previous environment state on drop.
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            // SAFETY: we reinstate the environment variable to its prior state.
            unsafe {
                match &self.previous {
                    Some(prev) => std::env::set_var(self.key, prev),
                    None => std::env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn defaults_match_reference_sizing() {
        let config = Config::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.sim.tourist_count, 120);
        assert_eq!(config.sim.alert_count, 5);
        assert!(!config.auth.protect_reads);
        assert!(config.dev_mode);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        for (raw, expected) in [("1", true), ("TRUE", true), ("yes", true), ("0", false)] {
            let _scope = EnvVarGuard::set("YATRA_PROTECT_READS", raw);
            assert_eq!(env_bool("YATRA_PROTECT_READS", false).unwrap(), expected);
        }
    }

    #[test]
    fn rejects_unparseable_values() {
        let _scope = EnvVarGuard::set("YATRA_PORT", "not-a-port");
        let err = env_parsed("YATRA_PORT", DEFAULT_PORT).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidValue {
                var: "YATRA_PORT",
                ..
            }
        ));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let _scope = EnvVarGuard::set("YATRA_PORT", "  ");
        assert_eq!(env_parsed("YATRA_PORT", DEFAULT_PORT).unwrap(), DEFAULT_PORT);
    }
}
