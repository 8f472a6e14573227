use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown inquiry type '{0}' (expected SE or PA)")]
    UnknownInquiryType(String),
    #[error("missing required configuration value: {0}")]
    MissingConfig(&'static str),
    #[error("unknown trailer count policy '{0}'")]
    UnknownTrailerPolicy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
