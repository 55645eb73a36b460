use thiserror::Error;

/// Error types for the udpecho library
#[derive(Error, Debug)]
pub enum EchoError {
    /// UDP socket errors (send, receive, address lookup)
    #[error("UDP error: {0}")]
    Udp(std::io::Error),

    /// Configuration errors (bad addresses, failed binds)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background task failures
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for the udpecho library
pub type Result<T> = std::result::Result<T, EchoError>;

pub mod client;
pub mod common;
pub mod counter;
pub mod server;

// Re-export main types for convenience
pub use client::{ECHO_PAYLOAD, LoadClient, LoadConfig, LoadReport};
pub use counter::SourceCounter;
pub use server::{EchoServer, ServerConfig};
