//! Runtime Configuration
//!
//! Settings are read from `BOOKS_*` environment variables first; command-line flags
//! override them afterwards (see `cli::GlobalArgs`).

use anyhow::{Result, anyhow};
use std::fmt::Display;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BIND: &str = "BOOKS_BIND";
pub const ENV_CATALOG: &str = "BOOKS_CATALOG";
pub const ENV_READING_MS: &str = "BOOKS_READING_MS";
pub const ENV_MAX_CONCURRENCY: &str = "BOOKS_MAX_CONCURRENCY";

pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
pub const DEFAULT_READING_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// JSON catalog to load. `None` uses the built-in sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Simulated reading time applied to every found book.
    pub reading_duration: Duration,
    /// Cap on concurrently running simulation tasks. `None` means unbounded.
    pub max_concurrency: Option<NonZeroUsize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND,
            catalog_path: None,
            reading_duration: Duration::from_millis(DEFAULT_READING_MS),
            max_concurrency: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Settings::default();

        if let Some(bind_addr) = parse_var::<SocketAddr>(&lookup, ENV_BIND)? {
            settings.bind_addr = bind_addr;
        }
        if let Some(path) = lookup(ENV_CATALOG) {
            settings.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_READING_MS)? {
            settings.reading_duration = Duration::from_millis(ms);
        }
        settings.max_concurrency = parse_var::<NonZeroUsize>(&lookup, ENV_MAX_CONCURRENCY)?;

        Ok(settings)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("invalid value for {}: '{}' ({})", key, raw, e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(|_| None).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_addr, DEFAULT_BIND);
        assert_eq!(settings.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(settings.reading_duration, Duration::from_secs(2));
        assert!(settings.max_concurrency.is_none());
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_BIND, "127.0.0.1:9000"),
            (ENV_CATALOG, "/tmp/books.json"),
            (ENV_READING_MS, "150"),
            (ENV_MAX_CONCURRENCY, "8"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(settings.catalog_path, Some(PathBuf::from("/tmp/books.json")));
        assert_eq!(settings.reading_duration, Duration::from_millis(150));
        assert_eq!(settings.max_concurrency, NonZeroUsize::new(8));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_CATALOG, "   "),
            (ENV_READING_MS, ""),
        ]))
        .unwrap();

        assert!(settings.catalog_path.is_none());
        assert_eq!(settings.reading_duration, Duration::from_millis(DEFAULT_READING_MS));
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = Settings::from_lookup(lookup_from(&[(ENV_READING_MS, "two seconds")]))
            .unwrap_err();

        assert!(err.to_string().contains(ENV_READING_MS));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(ENV_MAX_CONCURRENCY, "0")])).unwrap_err();

        assert!(err.to_string().contains(ENV_MAX_CONCURRENCY));
    }
}
