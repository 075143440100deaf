//! IoT Registry Manager
//!
//! Command-line option parsing for a demonstration program that manages
//! cloud IoT device registries. The parser resolves flags, defaults and
//! environment fallbacks into an immutable [`config::Options`] record;
//! the registry/device operations themselves live in the cloud API
//! client that consumes that record.

pub mod config;
pub mod error;

pub use config::{CliArgs, Options};
pub use error::{OptionsError, OptionsResult};
