//! Shriek CLI - Command-line interface
//!
//! Runs the web server with configuration from the environment and flags.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shriek")]
#[command(about = "Find where every horror movie is streaming")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
