use std::net::SocketAddr;

use rolodex_server::routes;
use rolodex_store::ProfileStore;
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer().with_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("info")),
                    ),
                )
                .init();

            let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = match std::env::var("PORT") {
                Ok(port_str) => port_str
                    .parse::<u16>()
                    .map_err(|e| anyhow::anyhow!("Invalid port value '{}': {}", port_str, e))?,
                Err(_) => 5023,
            };

            let addr: SocketAddr = format!("{host}:{port}").parse()?;
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Rolodex server listening on http://{addr}");

            let store = ProfileStore::new();
            axum::serve(listener, routes::router(store))
                .with_graceful_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!("failed to listen for shutdown signal: {e}");
                    }
                })
                .await?;

            Ok(())
        })
}
