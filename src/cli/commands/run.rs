use std::process::Command;

use envconf::{ConfigError, Result};

use crate::cli::SourceArgs;
use crate::cli::commands::resolve_helpers;

/// Execute the `envconf run -- <command>` command.
///
/// Injects the resolved keys (or the whole mapping under the
/// environment name) into this process's environment, then runs
/// `command`, which inherits it. Returns the child's exit code.
pub fn execute(source: &SourceArgs, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "no command given",
        )));
    };

    resolve_helpers::resolve_blocking(source, false)?;
    tracing::debug!(program, "spawning with injected environment");

    let status = Command::new(program).args(args).status()?;
    Ok(status.code().unwrap_or(1))
}
