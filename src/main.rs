//! Address book server - Main entry point
//!
//! Serves an in-memory address book to MCP clients over stdio.

use address_book::services::{DirectoryService, DirectoryServiceImpl};
use address_book::{AddressBookMcpServer, Config};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(today) = config.today {
        info!("Birthday queries pinned to {}", today);
    }

    let directory = Arc::new(DirectoryServiceImpl::new().with_today(config.today))
        as Arc<dyn DirectoryService>;
    let server = AddressBookMcpServer::new(directory, config.server_name.clone());

    info!("Starting MCP server '{}' with stdio transport", config.server_name);
    address_book::server::run_server(server).await?;

    info!("Address book server shutdown complete");
    Ok(())
}
