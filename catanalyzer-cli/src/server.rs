//! Serve command: run the board editor API and front-end

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use clap::Args;

use catanalyzer_core::{DEFAULT_RADIUS, MAX_RADIUS};
use catanalyzer_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(long, default_value_t = 8003)]
    pub port: u16,

    /// Front-end files served next to the API
    #[arg(long, default_value = "catanalyzer/web")]
    pub static_dir: PathBuf,

    /// Radius of the blank board the session starts with
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: i32,
}

pub fn run(args: ServerArgs) -> Result<()> {
    let config = server_config(&args)?;
    tracing::info!(
        port = config.port,
        radius = config.radius,
        "starting catanalyzer server"
    );

    tokio::runtime::Runtime::new()?.block_on(run_server(config))
}

fn server_config(args: &ServerArgs) -> Result<ServerConfig> {
    ensure!(
        (0..=MAX_RADIUS).contains(&args.radius),
        "board radius {} is outside 0-{}",
        args.radius,
        MAX_RADIUS
    );
    check_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().into_owned(),
        radius: args.radius,
    })
}

/// A missing directory only disables the front-end; a file in its place is an error
fn check_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "static directory {} not found, serving the API only",
            path.display()
        );
        return Ok(());
    }
    ensure!(path.is_dir(), "static path is not a directory: {}", path.display());
    Ok(())
}
