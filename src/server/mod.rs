pub mod config;
pub mod server;
pub mod tests;

pub use config::ServerConfig;
pub use server::EchoServer;
