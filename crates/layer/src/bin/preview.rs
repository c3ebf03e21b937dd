//! # LAYER Preview
//!
//! Renders one screen file headlessly and prints what the engine built.
//!
//! ```bash
//! layer_preview screens/ login_screen
//! RUST_LOG=layer_ui=debug layer_preview screens/ signup --config layer.toml
//!
//! # directory and screen from `screens_dir` / `initial_screen`
//! layer_preview --config layer.toml
//! ```

use clap::Parser;
use layer::{
    outline, ApplyOutcome, DirectoryScreenSource, LayerConfig, LayerResult, Session,
};
use layer_shared::ValidationResult;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line of the preview tool.
#[derive(Debug, Parser)]
#[command(name = "layer_preview", about = "Render a server-driven screen and print its outline")]
struct Cli {
    /// Directory holding `<key>.json` screen files. Defaults to the
    /// config's `screens_dir`.
    screens_dir: Option<PathBuf>,

    /// Screen to render. Defaults to the config's `initial_screen`.
    key: Option<String>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("layer_preview: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns false when the screen could not be shown.
async fn run(cli: Cli) -> LayerResult<bool> {
    let config = match &cli.config {
        Some(path) => LayerConfig::load(path)?,
        None => LayerConfig::default(),
    };
    let source = DirectoryScreenSource::new(config.resolve_screens_dir(cli.screens_dir)?);
    let key = config.resolve_screen_key(cli.key);
    let mut session = Session::new(config.engine_config());
    let events = session.engine().subscribe();

    match session.load_and_apply(&source, &key).await {
        ApplyOutcome::Applied(report) => {
            println!(
                "screen '{}': {} rendered, {} skipped",
                key,
                report.rendered_count(),
                report.skipped
            );
        }
        ApplyOutcome::Failed(message) => {
            println!("screen '{}': {}", key, message);
            return Ok(false);
        }
        ApplyOutcome::Pending | ApplyOutcome::Stale => return Ok(false),
    }

    println!();
    print!("{}", outline(session.engine().tree(), session.container()));

    println!();
    match session.engine_mut().validate(&[]) {
        ValidationResult::Valid => println!("validation: all fields pass"),
        ValidationResult::Invalid(errors) => {
            println!("validation: {} field(s) failing", errors.len());
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
        }
    }

    for event in events.drain() {
        println!("event: {event:?}");
    }
    Ok(true)
}
