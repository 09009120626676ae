//! Credforge Worker Service Entry Point
//!
//! Loads configuration and word lists, then starts the HTTP server.

use credforge_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
