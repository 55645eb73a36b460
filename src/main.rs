use color_eyre::eyre::{Result, WrapErr};
use std::net::{IpAddr, SocketAddr};
use udpecho::client::{LoadClient, LoadConfig};
use udpecho::server::{EchoServer, ServerConfig};

use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("udpecho=info")
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let mode = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "server".to_string());

    match mode.as_str() {
        "server" => {
            let ip = args.get(2).cloned().unwrap_or_else(|| "::".to_string());
            let ip: IpAddr = ip
                .parse()
                .wrap_err_with(|| format!("Invalid bind address: {ip}"))?;
            let port = args
                .get(3)
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(10100);

            let config = ServerConfig {
                bind_addr: SocketAddr::new(ip, port),
                ..ServerConfig::default()
            };

            info!(address = %config.bind_addr, report_interval = ?config.report_interval, "Starting UDP echo server");

            let server = EchoServer::bind(config)
                .await
                .wrap_err("Failed to start UDP echo server")?;
            server.run().await.wrap_err("Failed to run UDP echo server")?;
        }
        "client" => {
            let host = args
                .get(2)
                .cloned()
                .unwrap_or_else(|| "127.0.0.1".to_string());
            let port = args
                .get(3)
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(10100);
            let count = args
                .get(4)
                .and_then(|c| c.parse::<usize>().ok())
                .unwrap_or(100);

            let config = LoadConfig {
                target: format!("{host}:{port}"),
                message_count: count,
                ..LoadConfig::default()
            };

            info!(target = %config.target, messages = config.message_count, "Starting UDP load client");

            let client = LoadClient::new(config);
            let report = client.run().await.wrap_err("Failed to run UDP load client")?;

            println!("total sent messages: {}", report.sent);
            println!("total read messages: {}", report.received);
        }
        _ => {
            eprintln!("Usage: {} [server|client] ...", args[0]);
            eprintln!("  server [bind_ip] [port]        Run the echo server (default: :: 10100)");
            eprintln!("  client [host] [port] [count]   Run the load client (default: 127.0.0.1 10100 100)");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} server                      # Echo server on all interfaces, port 10100", args[0]);
            eprintln!("  {} server 0.0.0.0 9090         # Echo server on IPv4, port 9090", args[0]);
            eprintln!("  {} client echo.example.com     # Send 100 datagrams to echo.example.com:10100", args[0]);
            eprintln!("  {} client 127.0.0.1 10100 500  # Send 500 datagrams to a local server", args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}
