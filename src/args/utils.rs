//! Shared utilities for argument processing.

use kheti_guru::i18n::Params;

use super::CliError;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse `name=value` pairs into interpolation parameters.
///
/// Inputs:
/// - `pairs`: Raw `--param` values.
///
/// Output:
/// - Parameter map, or `CliError::InvalidParam` for the first malformed pair.
///
/// Details:
/// - Splits on the first `=`, so values may contain `=`.
/// - Later duplicates override earlier ones.
pub fn parse_params(pairs: &[String]) -> Result<Params, CliError> {
    let mut params = Params::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidParam(pair.clone()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::InvalidParam(pair.clone()));
        }
        params.insert(name.to_string(), value.to_string());
    }
    Ok(params)
}
