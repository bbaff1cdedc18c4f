use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(String),
    #[error("failed to deserialize config: {0}")]
    Deserialize(String),
    #[error("config validation error: {0}")]
    Validation(String),
    #[error("config cache lock poisoned")]
    Poisoned,
}
