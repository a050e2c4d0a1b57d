use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("no command generated yet for session: {0}")]
    NoCommandGenerated(String),

    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
