use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmverError {
    #[error("Configuration validation failed: {0}")]
    Config(String),

    #[error("Version parsing failed: {0}")]
    VersionParse(String),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CmverError>;
