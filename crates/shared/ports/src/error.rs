use thiserror::Error;

/// Errors raised by market feed implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Invalid feed configuration: {0}")]
    InvalidConfig(String),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
