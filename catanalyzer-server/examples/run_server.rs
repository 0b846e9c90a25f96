//! Example to run the Catanalyzer server standalone
//!
//! Run with: cargo run -p catanalyzer-server --example run_server

use catanalyzer_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting Catanalyzer server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Try: curl -X POST localhost:{}/api/board/randomize -H 'content-type: application/json' -d '{{}}'", config.port);

    run_server(config).await
}
