use envconf::Result;

use crate::cli::SourceArgs;
use crate::cli::commands::resolve_helpers;
use crate::cli::output;

/// Execute the `envconf resolve` command.
///
/// Prints the merged configuration, or the selected keys, as JSON.
/// With `inject`, values are written into this process's environment
/// and the `true` markers are printed instead.
pub fn execute(source: &SourceArgs, inject: bool) -> Result<()> {
    let resolution = resolve_helpers::resolve_blocking(source, !inject)?;
    output::json(&resolution.into_value());
    Ok(())
}
