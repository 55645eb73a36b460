use std::net::SocketAddr;
use std::time::Duration;

/// Echo server configuration
///
/// # Examples
///
/// ```
/// use udpecho::server::ServerConfig;
/// use std::time::Duration;
///
/// let config = ServerConfig {
///     bind_addr: "127.0.0.1:10100".parse().unwrap(),
///     buffer_size: 2048,
///     report_interval: Duration::from_secs(300),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Buffer size for receiving datagrams
    pub buffer_size: usize,
    /// How often the per-source counts are reported and reset
    pub report_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "[::]:10100".parse().unwrap(),
            buffer_size: 2048,
            report_interval: Duration::from_secs(300),
        }
    }
}
