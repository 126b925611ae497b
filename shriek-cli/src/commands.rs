//! CLI command handling

use clap::Subcommand;
use shriek_core::ShriekConfig;
use shriek_core::tracing_setup::{CliLogLevel, init_tracing};

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Socket address to bind, as "host:port" (overrides SHRIEK_BIND)
        #[arg(long)]
        bind: Option<String>,

        /// Console log level
        #[arg(long, default_value_t = CliLogLevel::Info)]
        log_level: CliLogLevel,
    },
}

/// Dispatches a parsed command.
///
/// # Errors
///
/// Returns an error when tracing setup fails, the TMDB credential is
/// missing, or the server cannot bind its listen address.
pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { bind, log_level } => {
            init_tracing(log_level.as_tracing_level(), None)?;

            let mut config = ShriekConfig::from_env();
            if let Some(bind) = bind {
                config.http.bind = bind;
            }

            tracing::debug!("serving with bind address {}", config.http.bind);
            shriek_web::run_server(config).await
        }
    }
}
