use crate::counter::SourceCounter;
use crate::server::{EchoServer, ServerConfig};
use crate::{EchoError, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// Spawns the real echo server on an ephemeral loopback port for
/// integration tests
///
/// Returns the server task, the bound address, and the shared counter so
/// tests can trigger and inspect reports. The socket is bound before the
/// task starts, so datagrams sent immediately after this returns are not
/// lost.
pub async fn spawn_echo_server() -> Result<(JoinHandle<Result<()>>, SocketAddr, Arc<SourceCounter>)>
{
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        ..ServerConfig::default()
    };

    let server = EchoServer::bind(config).await?;
    let addr = server.local_addr()?;
    let counter = server.counter();

    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr, counter))
}

/// Spawns an echo server that truncates every response by one byte, for
/// exercising the client's length verification
pub async fn spawn_truncating_server() -> Result<(JoinHandle<()>, SocketAddr)> {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .map_err(|e| EchoError::Config(format!("Failed to bind test socket: {e}")))?;
    let addr = socket.local_addr().map_err(EchoError::Udp)?;

    let server_handle = tokio::spawn(async move {
        let mut buffer = vec![0; 2048];
        while let Ok((n, source)) = socket.recv_from(&mut buffer).await {
            let cut = n.saturating_sub(1);
            let _ = socket.send_to(&buffer[..cut], source).await;
        }
    });

    Ok((server_handle, addr))
}
