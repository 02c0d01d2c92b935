//! Configuration management for LexView Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Maximum accepted upload body size (10 MiB), enforced at the transport
/// layer before any handler logic runs.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub relay: RelayConfig,
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory stored files live under, created on first use.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Interpreter binary launched per question (e.g. `python3`).
    pub interpreter: PathBuf,
    /// Script the interpreter runs; reads the question on stdin.
    pub script: PathBuf,
    /// Admission limit on simultaneously running script processes.
    pub max_concurrent: usize,
    /// Per-question deadline; the child is killed when it elapses.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// When true, zoom controls only apply once a document is ready.
    /// Front-end variants disagreed on this; both behaviors are kept.
    pub zoom_requires_document: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            upload: UploadConfig {
                dir: PathBuf::from("./uploads"),
            },
            relay: RelayConfig {
                interpreter: PathBuf::from("python3"),
                script: PathBuf::from("./scripts/query.py"),
                max_concurrent: 4,
                timeout_secs: 120,
            },
            viewer: ViewerConfig {
                zoom_requires_document: false,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            upload: UploadConfig {
                dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.upload.dir),
            },
            relay: RelayConfig {
                interpreter: env::var("RELAY_INTERPRETER")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.relay.interpreter),
                script: env::var("RELAY_SCRIPT")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.relay.script),
                max_concurrent: env::var("RELAY_MAX_CONCURRENT")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.relay.max_concurrent),
                timeout_secs: env::var("RELAY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.relay.timeout_secs),
            },
            viewer: ViewerConfig {
                zoom_requires_document: env::var("ZOOM_REQUIRES_DOCUMENT")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(defaults.viewer.zoom_requires_document),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upload.dir, PathBuf::from("./uploads"));
        assert_eq!(config.relay.max_concurrent, 4);
        assert!(!config.viewer.zoom_requires_document);
    }
}
