//! Unified error types for agentpulse.
//! Used by: config, server, main.
//!
//! The metrics route itself cannot fail; these cover process startup.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
