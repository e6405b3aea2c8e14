use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tabhop::config::{SOCKET_ENV, Settings};

use crate::cli_commands::Commands;

#[derive(Parser)]
#[command(name = "tabhop")]
#[command(about = "Find and switch to browser tabs from the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Socket of the browser's native messaging host
    #[arg(long, global = true, value_name = "PATH")]
    socket: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().context("load settings")?;
    let socket = settings.resolve_socket(cli.socket, std::env::var(SOCKET_ENV).ok());
    tracing::debug!(socket = %socket.display(), "resolved peer socket");

    crate::cli_exec::handle_command(&settings, socket, cli.command).await
}
