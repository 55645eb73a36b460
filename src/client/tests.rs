

#[cfg(test)]
mod tests {
    use crate::client::{ECHO_PAYLOAD, LoadClient, LoadConfig};
    use std::time::Duration;

    #[test]
    fn test_payload_length() {
        assert_eq!(ECHO_PAYLOAD.len(), 37);
    }

    #[tokio::test]
    async fn test_config_default() {
        let config = LoadConfig::default();
        assert_eq!(config.target, "127.0.0.1:10100");
        assert_eq!(config.message_count, 100);
        assert_eq!(config.send_interval, Duration::from_millis(1));
        assert_eq!(config.settle_time, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_run_rejects_unresolvable_target() {
        let config = LoadConfig {
            target: "not a valid target".to_string(),
            ..LoadConfig::default()
        };
        let client = LoadClient::new(config);
        assert!(client.run().await.is_err());
    }
}
