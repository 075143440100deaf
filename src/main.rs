//! IoT Registry Manager - Main Entry Point

use std::process::ExitCode;

use iot_registry_manager::config::Options;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,iot_registry_manager=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments; usage and the failure reason have already
    // been printed on the error path
    let Some(options) = Options::from_flags(std::env::args()) else {
        return ExitCode::FAILURE;
    };
    info!(?options, "Parsed device registry options");

    // Command dispatch (create/delete/get/list/patch against the cloud
    // API) is handled by the client consuming these options
    ExitCode::SUCCESS
}
