use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("No annotation recorded for: {0:?}")]
    AnnotationMissing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
