use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set when STORE=postgres")]
    MissingDatabaseUrl,

    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which `PedidoRepository` backs the server.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreSettings {
    Postgres { database_url: String, pool_size: u32 },
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store: StoreSettings,
}

impl Settings {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT, "a valid port number")?;

        let store = match lookup("STORE").as_deref() {
            None | Some("postgres") => StoreSettings::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                pool_size: parse_or(
                    "DB_POOL_SIZE",
                    lookup("DB_POOL_SIZE"),
                    DEFAULT_POOL_SIZE,
                    "a positive integer",
                )?,
            },
            Some("memory") => StoreSettings::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE",
                    expected: "'postgres' or 'memory'",
                    value: other.to_string(),
                })
            }
        };

        if let StoreSettings::Postgres { pool_size: 0, .. } = store {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_SIZE",
                expected: "a positive integer",
                value: "0".to_string(),
            });
        }

        Ok(Settings { host, port, store })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn postgres_is_the_default_store() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/pedidos")]).expect("valid");

        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(
            s.store,
            StoreSettings::Postgres {
                database_url: "postgres://localhost/pedidos".to_string(),
                pool_size: 10,
            }
        );
    }

    #[test]
    fn postgres_without_database_url_is_rejected() {
        assert_eq!(settings(&[]), Err(ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn memory_store_needs_no_database_url() {
        let s = settings(&[("STORE", "memory"), ("PORT", "9000")]).expect("valid");

        assert_eq!(s.store, StoreSettings::Memory);
        assert_eq!(s.port, 9000);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = settings(&[("STORE", "memory"), ("PORT", "eighty")]).expect_err("bad port");

        assert_eq!(err.to_string(), "PORT must be a valid port number, got 'eighty'");
    }

    #[test]
    fn unknown_store_is_reported() {
        let err = settings(&[("STORE", "redis")]).expect_err("bad store");

        assert!(matches!(err, ConfigError::Invalid { key: "STORE", .. }));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = settings(&[("DATABASE_URL", "postgres://x"), ("DB_POOL_SIZE", "0")])
            .expect_err("zero pool");

        assert!(matches!(err, ConfigError::Invalid { key: "DB_POOL_SIZE", .. }));
    }
}
