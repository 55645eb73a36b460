use super::config::{ECHO_PAYLOAD, LoadConfig};
use crate::{EchoError, Result};

use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Totals from a completed load run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Datagrams handed to the socket
    pub sent: usize,
    /// Responses that came back with the expected length
    pub received: usize,
}

/// Load-generating client that paces a fixed payload at an echo server and
/// verifies the responses coming back.
///
/// The run is bounded: `message_count` sends with `send_interval` pacing,
/// bracketed by `settle_time` grace periods so in-flight datagrams can
/// arrive before totals are taken. There is no retry and no sequencing;
/// the only check is that each response has the expected byte length.
///
/// # Examples
///
/// ```no_run
/// use udpecho::client::{LoadClient, LoadConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LoadClient::new(LoadConfig::default());
///     let report = client.run().await?;
///     println!("total sent messages: {}", report.sent);
///     println!("total read messages: {}", report.received);
///     Ok(())
/// }
/// ```
pub struct LoadClient {
    config: LoadConfig,
}

impl LoadClient {
    /// Creates a load client with the given configuration
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    /// Runs one bounded load round and returns the totals
    ///
    /// Connect failures are fatal; send errors are logged and the loop
    /// continues. Every send attempt counts toward `sent`.
    pub async fn run(&self) -> Result<LoadReport> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| EchoError::Config(format!("Failed to bind UDP socket: {e}")))?;
        socket.connect(self.config.target.as_str()).await.map_err(|e| {
            EchoError::Config(format!("Failed to connect to {}: {}", self.config.target, e))
        })?;
        let socket = Arc::new(socket);

        let local = socket.local_addr().map_err(EchoError::Udp)?;
        let remote = socket.peer_addr().map_err(EchoError::Udp)?;
        info!(%local, %remote, "Load client connected");

        let cancel = CancellationToken::new();
        let receiver = spawn_receiver(
            Arc::clone(&socket),
            self.config.message_count,
            cancel.clone(),
        );

        sleep(self.config.settle_time).await;

        let mut sent = 0;
        for _ in 0..self.config.message_count {
            if let Err(e) = socket.send(ECHO_PAYLOAD).await {
                error!(error = %e, "Failed to send datagram");
            }
            sent += 1;
            sleep(self.config.send_interval).await;
        }

        sleep(self.config.settle_time).await;
        cancel.cancel();

        let received = receiver.await?;
        Ok(LoadReport { sent, received })
    }
}

/// Reads echo responses until the expected count arrives, a read error
/// occurs, or the run is cancelled. Only responses of exactly the payload
/// length count; anything else is logged and dropped.
fn spawn_receiver(
    socket: Arc<UdpSocket>,
    expected: usize,
    cancel: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut buffer = vec![0; ECHO_PAYLOAD.len() + 16];
        let mut received = 0;

        while received < expected {
            // Cancellation is observed between reads; a response already
            // deliverable when the token fires is still consumed.
            let n = tokio::select! {
                biased;
                res = socket.recv(&mut buffer) => match res {
                    Ok(n) => n,
                    Err(e) => {
                        error!(error = %e, "Failed to read echo response");
                        break;
                    }
                },
                _ = cancel.cancelled() => break,
            };

            if n == ECHO_PAYLOAD.len() {
                received += 1;
            } else {
                error!(size = n, expected = ECHO_PAYLOAD.len(), "Wrong response length");
            }
        }

        received
    })
}
