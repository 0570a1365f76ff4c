//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:5002";

/// Default precomputed transit pairs file.
pub const DEFAULT_PAIRS_CSV: &str = "data/metro_pairs.csv";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {name} is invalid: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Which travel estimator the server uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimatorChoice {
    /// Google Directions with this API key.
    Directions { api_key: String },
    /// Offline straight-line estimates.
    Mock,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub estimator: EstimatorChoice,
    /// Station coordinates file; the built-in Bengaluru table when unset.
    pub stations_csv: Option<PathBuf>,
    pub pairs_csv: PathBuf,
    pub addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mock = match lookup("METRO_PLANNER_MOCK_ESTIMATOR").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "METRO_PLANNER_MOCK_ESTIMATOR",
                    message: format!("expected true or false, got {other:?}"),
                });
            }
        };

        let estimator = if mock {
            EstimatorChoice::Mock
        } else {
            let api_key = lookup("GOOGLE_MAPS_API_KEY")
                .filter(|key| !key.is_empty())
                .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?;
            EstimatorChoice::Directions { api_key }
        };

        let addr_str = lookup("METRO_PLANNER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_str.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "METRO_PLANNER_ADDR",
            message: format!("{addr_str:?}: {e}"),
        })?;

        Ok(Self {
            estimator,
            stations_csv: lookup("METRO_STATIONS_CSV")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            pairs_csv: lookup("METRO_PAIRS_CSV")
                .unwrap_or_else(|| DEFAULT_PAIRS_CSV.to_string())
                .into(),
            addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_with_api_key() {
        let cfg = config(&[("GOOGLE_MAPS_API_KEY", "secret")]).unwrap();
        assert_eq!(
            cfg.estimator,
            EstimatorChoice::Directions {
                api_key: "secret".into()
            }
        );
        assert_eq!(cfg.addr, "127.0.0.1:5002".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.stations_csv, None);
        assert_eq!(cfg.pairs_csv, PathBuf::from(DEFAULT_PAIRS_CSV));
    }

    #[test]
    fn api_key_required() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::Missing("GOOGLE_MAPS_API_KEY")
        );
        assert_eq!(
            config(&[("GOOGLE_MAPS_API_KEY", "")]).unwrap_err(),
            ConfigError::Missing("GOOGLE_MAPS_API_KEY")
        );
    }

    #[test]
    fn mock_needs_no_key() {
        let cfg = config(&[("METRO_PLANNER_MOCK_ESTIMATOR", "true")]).unwrap();
        assert_eq!(cfg.estimator, EstimatorChoice::Mock);
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("GOOGLE_MAPS_API_KEY", "k"),
            ("METRO_PLANNER_ADDR", "0.0.0.0:8080"),
            ("METRO_STATIONS_CSV", "/srv/stations.csv"),
            ("METRO_PAIRS_CSV", "/srv/pairs.csv"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.stations_csv, Some(PathBuf::from("/srv/stations.csv")));
        assert_eq!(cfg.pairs_csv, PathBuf::from("/srv/pairs.csv"));
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            config(&[("GOOGLE_MAPS_API_KEY", "k"), ("METRO_PLANNER_ADDR", "nowhere")]),
            Err(ConfigError::Invalid { name: "METRO_PLANNER_ADDR", .. })
        ));
        assert!(matches!(
            config(&[("METRO_PLANNER_MOCK_ESTIMATOR", "maybe")]),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
