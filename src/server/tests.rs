

#[cfg(test)]
mod tests {
    use crate::server::{EchoServer, ServerConfig};
    use std::time::Duration;

    #[tokio::test]
    async fn test_config_default() {
        let config = ServerConfig::default();
        assert!(config.bind_addr.ip().is_unspecified());
        assert_eq!(config.bind_addr.port(), 10100);
        assert_eq!(config.buffer_size, 2048);
        assert_eq!(config.report_interval, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };
        let server = EchoServer::bind(config).await.unwrap();
        assert_ne!(server.local_addr().unwrap().port(), 0);
        assert_eq!(server.shutdown_signal().receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_bind_failure_is_fatal() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };
        let first = EchoServer::bind(config).await.unwrap();

        // A second bind to the same concrete port must fail.
        let taken = ServerConfig {
            bind_addr: first.local_addr().unwrap(),
            ..ServerConfig::default()
        };
        assert!(EchoServer::bind(taken).await.is_err());
    }
}
