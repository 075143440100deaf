//! Resolved option record

use std::ffi::OsString;

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::{
    config::CliArgs,
    error::{OptionsError, OptionsResult},
};

/// Primary environment fallback for `--project_id`
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";

/// Secondary environment fallback for `--project_id`
pub const GCLOUD_PROJECT: &str = "GCLOUD_PROJECT";

/// Options for the device registry manager, resolved from command-line
/// flags and the process environment
///
/// One record is built per invocation and handed to the cloud API
/// client that runs the actual registry/device operations. `command` is
/// never "help" or empty; both are rejected during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: String,
    pub project_id: Option<String>,
    pub ec_public_key_file: String,
    pub rsa_certificate_file: String,
    pub cloud_region: String,
    pub registry_name: Option<String>,
    pub device_id: Option<String>,
    pub pubsub_topic: String,
}

impl Options {
    /// Construct an `Options` record from command-line flags
    ///
    /// The first element of `args` is the program name, as with
    /// `std::env::args()`. On any invalid input the usage text and the
    /// failure reason are printed to stderr and `None` is returned;
    /// deciding the exit status is up to the caller.
    pub fn from_flags<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let resolved = CliArgs::try_parse_from(args)
            .map_err(OptionsError::from)
            .and_then(|args| Self::resolve(args, |name| std::env::var(name).ok()));

        match resolved {
            Ok(options) => Some(options),
            Err(OptionsError::Syntax(err))
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
            {
                // clap routes explicit --help/--version to stdout itself
                let _ = err.print();
                None
            }
            Err(err) => {
                let mut cmd = CliArgs::command();
                eprintln!("{}", cmd.render_long_help());
                eprintln!("{err}");
                None
            }
        }
    }

    /// Resolve parsed flags into the final record
    ///
    /// The environment is injected as a lookup function so tests can
    /// substitute it. `project_id` falls back to `GOOGLE_CLOUD_PROJECT`,
    /// then `GCLOUD_PROJECT`, when the flag is absent. `pubsub_topic`
    /// has no environment fallback.
    pub fn resolve<F>(args: CliArgs, env: F) -> OptionsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if args.command.is_empty() || args.command == "help" {
            return Err(OptionsError::InvalidCommand);
        }

        let project_id = args
            .project_id
            .or_else(|| env(GOOGLE_CLOUD_PROJECT))
            .or_else(|| env(GCLOUD_PROJECT));

        Ok(Options {
            command: args.command,
            project_id,
            ec_public_key_file: args.ec_public_key_file,
            rsa_certificate_file: args.rsa_certificate_file,
            cloud_region: args.cloud_region,
            registry_name: args.registry_name,
            device_id: args.device_id,
            pubsub_topic: args.pubsub_topic,
        })
    }
}
