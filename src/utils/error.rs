use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not find {0} directory")]
    MissingDir(&'static str),

    #[error("Failed to read settings file: {0}")]
    ReadSettings(#[source] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    ParseSettings(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeSettings(#[from] toml::ser::Error),

    #[error("Failed to write settings file: {0}")]
    WriteSettings(#[source] std::io::Error),

    #[error("Failed to parse feed: {0}")]
    ParseFeed(#[from] serde_json::Error),

    #[error("Failed to access clipboard: {0}")]
    Clipboard(String),
}
