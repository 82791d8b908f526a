use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub database_path: String,
    pub seed_on_start: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("5000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let bind_addr = match env_map.get("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue(
                    "BIND_ADDR".to_string(),
                    format!("must be an IP address, got {}", raw),
                )
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let database_path = env_map
            .get("DATABASE_PATH")
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let seed_on_start = parse_bool(&env_map, "SEED_ON_START", true)?;

        Ok(Config {
            port,
            bind_addr,
            database_path,
            seed_on_start,
        })
    }
}

/// Log filter from a `RUST_LOG`-style directive string, `info` when unset or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn parse_bool(
    env_map: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    match env_map.get(key).map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidValue(
                key.to_string(),
                format!("must be true or false, got {}", other),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("DATABASE_PATH".to_string(), "/tmp/trivia.db".to_string());
        map
    }

    #[test]
    fn test_defaults() {
        let config = tokio_test::assert_ok!(Config::from_env_map(setup_required_env()));
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.database_path, "/tmp/trivia.db");
        assert!(config.seed_on_start);
    }

    #[test]
    fn test_missing_database_path() {
        let mut env_map = setup_required_env();
        env_map.remove("DATABASE_PATH");
        match Config::from_env_map(env_map) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "DATABASE_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_blank_database_path_is_missing() {
        let mut env_map = setup_required_env();
        env_map.insert("DATABASE_PATH".to_string(), "  ".to_string());
        assert!(matches!(
            Config::from_env_map(env_map),
            Err(ConfigError::MissingEnv(_))
        ));
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = setup_required_env();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut env_map = setup_required_env();
        env_map.insert("BIND_ADDR".to_string(), "localhost".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "BIND_ADDR"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_log_filter_respects_directives() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            log_filter(Some("not a [valid directive")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_seed_flag_parsing() {
        let mut env_map = setup_required_env();
        env_map.insert("SEED_ON_START".to_string(), "False".to_string());
        assert!(!Config::from_env_map(env_map.clone()).unwrap().seed_on_start);

        env_map.insert("SEED_ON_START".to_string(), "maybe".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "SEED_ON_START"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
