//! anagramd server binary.
//!
//! ```text
//! anagramd [--config anagramd.toml] [--port 8088]
//! curl 'http://localhost:8088/anagram?p=aab'
//! ```

use std::path::PathBuf;

use anagramd::{AppState, Server, ServerConfig, app, telemetry};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "anagramd", version, about = "Serve anagram counts over HTTP")]
struct Args {
    /// Configuration file (toml, json or yaml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overriding the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ServerConfig::load(args.config.as_deref())?.with_port(args.port);

    telemetry::init(&config.log_level, config.log_format);
    tracing::info!(
        secret_path = %config.secret_path.display(),
        query_mode = ?config.query_mode,
        "configuration loaded"
    );

    let state = AppState::from_config(&config);
    Server::bind(config.socket_addr()?)
        .await?
        .serve(app::router(state))
        .await?;

    Ok(())
}
