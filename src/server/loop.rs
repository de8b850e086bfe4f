// Server loop module
// Accept loop with clean Ctrl-C shutdown

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Run the accept loop until Ctrl-C.
///
/// Accepted connections are served on spawned local tasks; in-flight
/// connections finish naturally after the loop returns.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    logger::log_error(&format!("Failed to listen for shutdown signal: {e}"));
                }
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
