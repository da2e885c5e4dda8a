//! MCP server front end for the address book.
//!
//! Exposes the directory operations to MCP clients over stdio.

pub mod handlers;

pub use handlers::AddressBookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the address book MCP server with stdio transport.
///
/// Blocks until the client disconnects.
pub async fn run_server(server: AddressBookMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
