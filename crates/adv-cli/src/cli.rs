use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adv",
    about = "Read application state from an advance-result ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Ledger node URL
    #[arg(long, global = true)]
    pub node: Option<String>,

    /// Deadline for the whole read, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Get the latest state from the application
    State(StateArgs),
    /// Run a development ledger node
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct StateArgs {}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// JSON array of results to preload
    #[arg(long)]
    pub seed: Option<PathBuf>,
}
