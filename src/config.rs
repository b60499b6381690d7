//! Configuration management for the notes server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::notes::{ExtractOptions, DEFAULT_PDF_DPI};

/// Default request body limit: 100MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the request host when building image URLs
    pub public_base_url: Option<String>,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory generated PNG pages are written to
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub pdf_dpi: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                public_base_url: None,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            assets: AssetConfig {
                dir: PathBuf::from("static/assets"),
            },
            extraction: ExtractionConfig {
                pdf_dpi: DEFAULT_PDF_DPI,
            },
        }
    }
}

impl Config {
    /// Build configuration from environment variables
    ///
    /// Unset variables take their defaults; set but unparsable numeric
    /// variables are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&lookup, "SERVER_PORT", defaults.server.port)?,
                public_base_url: lookup("PUBLIC_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .filter(|url| !url.is_empty()),
                max_upload_bytes: parse_var(
                    &lookup,
                    "MAX_UPLOAD_BYTES",
                    defaults.server.max_upload_bytes,
                )?,
            },
            assets: AssetConfig {
                dir: lookup("ASSET_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.assets.dir),
            },
            extraction: ExtractionConfig {
                pdf_dpi: parse_var(&lookup, "PDF_RENDER_DPI", defaults.extraction.pdf_dpi)?,
            },
        })
    }

    /// Options handed to the extraction strategies
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            pdf_dpi: self.extraction.pdf_dpi,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.public_base_url, None);
        assert_eq!(config.server.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.assets.dir, PathBuf::from("static/assets"));
        assert_eq!(config.extraction.pdf_dpi, 200);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("ASSET_DIR", "/tmp/notes"),
            ("PUBLIC_BASE_URL", "https://notes.example.com/"),
            ("PDF_RENDER_DPI", " 150 "),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assets.dir, PathBuf::from("/tmp/notes"));
        assert_eq!(
            config.server.public_base_url.as_deref(),
            Some("https://notes.example.com")
        );
        assert_eq!(config.extract_options().pdf_dpi, 150);
    }

    #[test]
    fn test_invalid_number() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "SERVER_PORT", .. })
        ));
    }
}
