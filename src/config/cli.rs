//! Command-line argument parsing

use clap::Parser;

/// Usage header shown above the flag list
const ABOUT: &str = "Cloud IoT Core command line example (device / registry management)";

/// Documentation link appended below the flag list
const AFTER_HELP: &str = "https://cloud.google.com/iot-core";

const COMMAND_HELP: &str = "Command to run:
\tcreate-iot-topic
\tcreate-rsa
\tcreate-es
\tcreate-unauth
\tcreate-registry
\tdelete-device
\tdelete-registry
\tget-device
\tget-device-state
\tget-registry
\tlist-devices
\tlist-registries
\tpatch-device-es
\tpatch-device-rsa";

#[derive(Parser, Debug, Clone)]
#[clap(name = "iot-registry-manager", version, author)]
#[clap(about = ABOUT, after_help = AFTER_HELP)]
pub struct CliArgs {
    /// Command to run
    ///
    /// Recognized values are validated by the cloud API client, not
    /// here; the parser only rejects "help" and the empty string.
    #[clap(long, value_name = "COMMAND", long_help = COMMAND_HELP)]
    pub command: String,

    /// Pub/Sub topic to create registry in
    #[clap(long = "pubsub_topic", value_name = "TOPIC")]
    pub pubsub_topic: String,

    /// GCP cloud project name
    #[clap(long = "project_id", value_name = "PROJECT")]
    pub project_id: Option<String>,

    /// Path to ES256 public key file
    #[clap(long = "ec_public_key_file", value_name = "PATH", default_value = "ec_public.pem")]
    pub ec_public_key_file: String,

    /// Path to RS256 certificate file
    #[clap(long = "rsa_certificate_file", value_name = "PATH", default_value = "rsa_cert.pem")]
    pub rsa_certificate_file: String,

    /// GCP cloud region
    #[clap(long = "cloud_region", value_name = "REGION", default_value = "us-central1")]
    pub cloud_region: String,

    /// Name for your device registry
    #[clap(long = "registry_name", value_name = "NAME")]
    pub registry_name: Option<String>,

    /// Name for your device
    #[clap(long = "device_id", value_name = "ID")]
    pub device_id: Option<String>,
}
