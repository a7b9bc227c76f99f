use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(format!("unknown store '{}'", other)),
        }
    }
}

/// Bounds applied to `page`/`size` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            default_size: 10,
            max_size: 2000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub paging: PageSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = parse_or(&lookup, "EMPLOYEE_STORE", StoreKind::Postgres)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let paging = PageSettings {
            default_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", 10)?,
            max_size: parse_or(&lookup, "MAX_PAGE_SIZE", 2000)?,
        };
        if paging.default_size == 0 || paging.default_size > paging.max_size {
            return Err(ConfigError::Invalid {
                key: "DEFAULT_PAGE_SIZE",
                value: paging.default_size.to_string(),
            });
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            store,
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            paging,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_for_memory_store() {
        let config = config(&[("EMPLOYEE_STORE", "memory")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.paging, PageSettings::default());
        assert_eq!(config.paging.default_size, 10);
    }

    #[test]
    fn postgres_requires_database_url() {
        let missing = config(&[]).unwrap_err();
        assert!(matches!(missing, ConfigError::Missing("DATABASE_URL")));
        assert_eq!(missing.to_string(), "DATABASE_URL must be set");
        let config = config(&[("DATABASE_URL", "postgres://localhost/employees")]).unwrap();
        assert_eq!(config.store, StoreKind::Postgres);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = config(&[("EMPLOYEE_STORE", "memory"), ("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT has invalid value 'http'");
        assert!(config(&[("EMPLOYEE_STORE", "mongo")]).is_err());
        assert!(config(&[("EMPLOYEE_STORE", "memory"), ("DEFAULT_PAGE_SIZE", "0")]).is_err());
    }
}
