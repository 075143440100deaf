//! Configuration module

pub mod cli;
pub mod options;

pub use cli::CliArgs;
pub use options::Options;
