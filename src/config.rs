// src/config.rs

use std::{env, path::PathBuf, str::FromStr};

const DEFAULT_DATABASE_PATH: &str = "plotify.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Process configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file, always opened read-only.
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable numbers fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            port: parse_or(lookup("PORT"), DEFAULT_PORT),
            max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)
                .max(1),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.database_path, PathBuf::from("plotify.db"));
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/data/school.db"),
            ("STATIC_DIR", "/srv/www"),
            ("PORT", " 9000 "),
            ("DB_MAX_CONNECTIONS", "4"),
        ]));
        assert_eq!(cfg.database_path, PathBuf::from("/data/school.db"));
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.max_connections, 4);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let cfg = Config::from_lookup(lookup_from(&[("PORT", "eighty"), ("DB_MAX_CONNECTIONS", "0")]));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.max_connections, 1);
    }
}
