//! entrepo demonstration driver
//!
//! Usage:
//!   entrepo-demo [--config repo.json] [--notify on-change] [--format json] [--verbose]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use entrepo_demo::{OutputFormat, load_config, render, run};
use entrepo_repository::NotifyPolicy;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "entrepo-demo")]
#[command(about = "Exercise entrepo repositories, publishers and audits")]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override when update/delete notify the publisher
    #[arg(long, value_enum)]
    notify: Option<NotifyArg>,

    /// Audit report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum NotifyArg {
    Always,
    OnChange,
}

impl From<NotifyArg> for NotifyPolicy {
    fn from(arg: NotifyArg) -> Self {
        match arg {
            NotifyArg::Always => Self::Always,
            NotifyArg::OnChange => Self::OnChange,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Default::default(),
    };
    if let Some(notify) = args.notify {
        config.repository.notify = notify.into();
    }
    info!("Notify policy: {:?}", config.repository.notify);

    let outcome = run(config.repository)?;
    info!("Recorded {} notifications", outcome.trail.len());
    println!("{}", render(&outcome.report, args.format)?);
    Ok(())
}
