pub mod client;
pub mod config;
pub mod tests;

pub use client::{LoadClient, LoadReport};
pub use config::{ECHO_PAYLOAD, LoadConfig};
