use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "scripts";
const DEFAULT_TRADES_FILE: &str = "dashboard_data.csv";
const DEFAULT_CLUSTERS_FILE: &str = "trader_clusters.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Datasets
    pub data_dir: PathBuf,
    pub trades_file: String,
    pub clusters_file: String,

    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port_raw = lookup("PORT").unwrap_or_else(|| "8080".into());
        let port = port_raw
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number, got {port_raw:?}: {e}"))?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            data_dir: lookup("DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.into())
                .into(),
            trades_file: lookup("TRADES_FILE").unwrap_or_else(|| DEFAULT_TRADES_FILE.into()),
            clusters_file: lookup("CLUSTERS_FILE")
                .unwrap_or_else(|| DEFAULT_CLUSTERS_FILE.into()),
            log_format: LogFormat::parse(&lookup("LOG_FORMAT").unwrap_or_default()),
        })
    }

    pub fn trades_path(&self) -> PathBuf {
        self.data_dir.join(&self.trades_file)
    }

    pub fn clusters_path(&self) -> PathBuf {
        self.data_dir.join(&self.clusters_file)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.trades_path(), PathBuf::from("scripts/dashboard_data.csv"));
        assert_eq!(config.clusters_path(), PathBuf::from("scripts/trader_clusters.csv"));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATA_DIR", "/srv/data"),
            ("TRADES_FILE", "trades.csv"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.trades_path(), PathBuf::from("/srv/data/trades.csv"));
        assert_eq!(config.clusters_path(), PathBuf::from("/srv/data/trader_clusters.csv"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(" Json "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
    }
}
