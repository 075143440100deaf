//! Error types for option parsing

use thiserror::Error;

/// Result type for option parsing
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Invalid command-line arguments
///
/// Every failure mode of the parser lands here: schema violations
/// reported by clap (unknown flag, missing value, missing required
/// flag) and the `help`/empty-command sentinel. All of them are handled
/// the same way by the caller: print usage, print the reason, give up.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error(transparent)]
    Syntax(#[from] clap::Error),

    #[error("invalid command, showing help")]
    InvalidCommand,
}
