mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match &args.command {
        Commands::Resolve { source, inject } => {
            cli::commands::resolve::execute(source, *inject).map(|()| 0)
        }
        Commands::Run { source, command } => cli::commands::run::execute(source, command),
        Commands::Encrypt { file, key, output } => {
            cli::commands::encrypt::execute(file, key, output.as_deref()).map(|()| 0)
        }
        Commands::Decrypt { file, key, output } => {
            cli::commands::decrypt::execute(file, key, output.as_deref()).map(|()| 0)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            cli::output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
