use std::time::Duration;

/// Fixed payload carried by every load-test datagram. The receive loop
/// verifies responses against its length (37 bytes).
pub const ECHO_PAYLOAD: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789\n";

/// Load client configuration
///
/// # Examples
///
/// ```
/// use udpecho::client::LoadConfig;
/// use std::time::Duration;
///
/// let config = LoadConfig {
///     target: "127.0.0.1:10100".to_string(),
///     message_count: 100,
///     send_interval: Duration::from_millis(1),
///     settle_time: Duration::from_secs(1),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Server to send to, as `host:port`. Hostnames are resolved when the
    /// client connects.
    pub target: String,
    /// Number of datagrams to send
    pub message_count: usize,
    /// Pause between consecutive sends
    pub send_interval: Duration,
    /// Grace period before the first send and after the last, letting
    /// in-flight responses arrive before the run is torn down
    pub settle_time: Duration,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            target: "127.0.0.1:10100".to_string(),
            message_count: 100,
            send_interval: Duration::from_millis(1),
            settle_time: Duration::from_secs(1),
        }
    }
}
