use thiserror::Error;

#[derive(Error, Debug)]
pub enum FalimError {
    #[error("Invalid chart data: {0}")]
    InvalidChart(#[from] serde_json::Error),

    #[error("Unsupported language code: {code}")]
    UnsupportedLanguage { code: String },

    #[error("Invalid house: {value}")]
    InvalidHouse { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FalimError>;
