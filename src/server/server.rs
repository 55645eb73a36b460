use super::config::ServerConfig;
use crate::counter::SourceCounter;
use crate::{EchoError, Result};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::{
    net::UdpSocket,
    signal,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::{error, info, trace};

/// UDP echo server that writes every received datagram back to its sender
/// and keeps per-source receive counts.
///
/// Counts are reported and reset on a fixed interval and whenever a line is
/// read on stdin. Socket errors on the echo path are logged and the loop
/// continues; only the initial bind is fatal.
///
/// # Examples
///
/// Basic server setup and running:
///
/// ```no_run
/// use udpecho::server::{EchoServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = EchoServer::bind(ServerConfig::default()).await?;
///     server.run().await?;
///     Ok(())
/// }
/// ```
///
/// Server with graceful shutdown:
///
/// ```no_run
/// use udpecho::server::{EchoServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = EchoServer::bind(ServerConfig::default()).await?;
///     let shutdown_signal = server.shutdown_signal();
///
///     let server_handle = tokio::spawn(async move {
///         server.run().await
///     });
///
///     // Do other work...
///
///     let _ = shutdown_signal.send(());
///     server_handle.await??;
///     Ok(())
/// }
/// ```
pub struct EchoServer {
    config: ServerConfig,
    socket: UdpSocket,
    counter: Arc<SourceCounter>,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl EchoServer {
    /// Binds the configured address and creates the server
    ///
    /// Binding to port 0 picks an ephemeral port; use [`local_addr`] to
    /// discover it.
    ///
    /// [`local_addr`]: EchoServer::local_addr
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let socket = UdpSocket::bind(config.bind_addr).await.map_err(|e| {
            EchoError::Config(format!("Failed to bind to {}: {}", config.bind_addr, e))
        })?;
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);

        Ok(Self {
            config,
            socket,
            counter: Arc::new(SourceCounter::new()),
            shutdown_signal: Arc::new(shutdown_signal),
        })
    }

    /// Address the server socket is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().map_err(EchoError::Udp)
    }

    /// The per-source counter shared with the reporting tasks
    pub fn counter(&self) -> Arc<SourceCounter> {
        Arc::clone(&self.counter)
    }

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    pub fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }

    /// Runs the echo loop alongside the interval reporter and the console
    /// trigger until shutdown
    pub async fn run(&self) -> Result<()> {
        let address = self.local_addr()?;
        info!(%address, "UDP echo server listening");

        let reporter = spawn_interval_reporter(self.counter(), self.config.report_interval);
        spawn_console_trigger(self.counter());

        let mut buffer = vec![0; self.config.buffer_size];
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                res = self.socket.recv_from(&mut buffer) => {
                    match res {
                        Ok((n, source)) => {
                            self.counter.add(source);
                            if let Err(e) = self.socket.send_to(&buffer[..n], source).await {
                                // The datagram is dropped from the sender's
                                // perspective; no retry.
                                error!(%source, error = %e, "Failed to send echo response");
                            } else {
                                trace!(%source, size = n, "Echoed datagram");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to receive datagram");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Received shutdown signal, stopping server");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("Received internal shutdown signal, stopping server");
                    break;
                }
            }
        }

        reporter.abort();

        info!("UDP echo server stopped");
        Ok(())
    }
}

/// Reports the per-source counts every `interval`. The first report fires
/// one full interval after startup, not immediately.
fn spawn_interval_reporter(counter: Arc<SourceCounter>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        loop {
            ticker.tick().await;
            counter.report();
        }
    })
}

/// Triggers an immediate report for every line read on stdin. The thread
/// ends at EOF or on a read error.
///
/// Stdin is read on a plain detached thread rather than through the
/// runtime: a blocked async stdin read cannot be cancelled and would stall
/// runtime shutdown. The thread dies with the process.
fn spawn_console_trigger(counter: Arc<SourceCounter>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            if line.is_err() {
                break;
            }
            counter.report();
        }
    });
}
