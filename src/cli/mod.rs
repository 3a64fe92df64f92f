pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resolve layered JSON configuration for the current environment.
#[derive(Parser, Debug)]
#[command(name = "envconf", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ENVCONF_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Inject into the environment instead of returning values
        #[arg(long)]
        inject: bool,
    },

    /// Inject resolved keys into the environment and run a command
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Command to run, after `--`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Encrypt a configuration document
    Encrypt {
        /// Plaintext JSON document
        file: PathBuf,

        /// Encryption key
        #[arg(long, env = "ENVCONF_KEY", hide_env_values = true)]
        key: String,

        /// Output path (default: <file>.enc)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a configuration document
    Decrypt {
        /// Encrypted document
        file: PathBuf,

        /// Decryption key
        #[arg(long, env = "ENVCONF_KEY", hide_env_values = true)]
        key: String,

        /// Write plaintext here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where to load configuration from and what to extract.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Config file path or URL
    #[arg(short, long, env = "APP_CONFIG_PATH")]
    pub path: Option<String>,

    /// Environment section overlaid on `base`
    #[arg(long, env = "APP_ENV", default_value = "dev")]
    pub env: String,

    /// Key to extract; repeat for several
    #[arg(short = 'k', long = "key-name")]
    pub keys: Vec<String>,

    /// Decryption key; marks the source as encrypted
    #[arg(long, env = "ENVCONF_KEY", hide_env_values = true)]
    pub key: Option<String>,
}
