use std::{
    io::{stderr, IsTerminal},
    process::ExitCode,
    rc::Rc,
};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tierscope::{
    config::{Args, ConfigError},
    export::{structured::export_json, tabular::export_xlsx, ExportError},
    service::{
        collector::CollectionRun,
        gameapi::client::{ClientInitError, LadderClient},
        rate_limit::{FixedDelay, RateLimiter, TokenBucket, Unlimited},
        report::{Reporter, TracingReporter},
    },
    ui::console::{self, ConsoleReporter},
};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tierscope=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("No matches were collected, nothing was exported.");
            ExitCode::from(2)
        }
        Err(error) => {
            println!("Error occured while collecting:\n{}\n", error);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether anything was collected and exported.
fn run(args: &Args) -> Result<bool, AppError> {
    let tiers = args.tier_configs()?;
    let fields = args.field_selection()?;
    let limiter: Box<dyn RateLimiter> = match args.rate_per_sec {
        Some(rate) => Box::new(TokenBucket::per_second(rate).map_err(ConfigError::from)?),
        None if args.delay_ms == 0 => Box::new(Unlimited),
        None => Box::new(FixedDelay::new(args.pause())),
    };
    let reporter: Rc<dyn Reporter> = if stderr().is_terminal() {
        Rc::new(ConsoleReporter)
    } else {
        Rc::new(TracingReporter)
    };

    let client = LadderClient::new(
        &args.api_key,
        &args.platform_base_url(),
        &args.regional_base_url(),
        Rc::clone(&reporter),
    )?;

    tracing::info!(tiers = tiers.len(), fields = fields.len(), "starting collection");
    let mut collection = CollectionRun::new(&client, fields, limiter, Rc::clone(&reporter));
    if let Some(seed) = args.seed {
        collection = collection.with_seed(seed);
    }
    let outcome = collection.collect_all(&tiers);

    console::print_summary(&outcome);
    if outcome.is_empty() {
        return Ok(false);
    }

    let mut artifacts = vec![export_json(&outcome.records)];
    if !args.no_xlsx {
        artifacts.push(export_xlsx(&outcome.records)?);
    }
    for artifact in &artifacts {
        let path = artifact.write_to(&args.out_dir)?;
        println!("Saved {} ({})", path.display(), artifact.content_type);
    }

    console::print_preview(&outcome, args.preview);
    Ok(true)
}

#[derive(Debug, Error)]
enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Client setup failed: {0}")]
    Client(#[from] ClientInitError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
