//! Scene editor replay host
//!
//! Replays a RON input script against the manipulation controller and prints
//! the resulting scene.

use clap::Parser;
use se_frontend::replay::{self, ReplayArgs, ReplayError, ReplayScript};
use se_renderer::GizmoConfig;

fn main() -> Result<(), ReplayError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "se_frontend=debug,se_renderer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ReplayArgs::parse();
    let config = args.load_config()?;

    tracing::info!("Replaying {}", args.script.display());
    let script = ReplayScript::load(&args.script)?;
    let report = replay::run(&script, config, GizmoConfig::default())?;

    println!("{report}");
    Ok(())
}
