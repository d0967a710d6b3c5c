use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use strategy_probe::config::ProbeConfig;
use strategy_probe::probe::ProbeReport;
use strategy_probe::registry::{CapabilityTag, SnapshotRegistry};

/// Exit code when at least one check failed
const EXIT_FAILED: u8 = 1;
/// Exit code for a malformed registry or unreadable input
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "strategy-probe")]
#[command(version, about = "Check which provisioning strategies a host has registered")]
struct Cli {
    /// JSON snapshot of the host's extension lists
    #[arg(long)]
    snapshot: PathBuf,

    /// Probe configuration file (defaults to the built-in checks)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host version, overriding the one recorded in the snapshot
    #[arg(long)]
    host_version: Option<String>,

    /// Extension point to probe, overriding the configured one
    #[arg(long)]
    capability: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Logs go to stderr so stdout only carries the report.
///
/// Log level is `--debug`, then `RUST_LOG`, then info.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("strategy_probe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strategy_probe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    debug!("strategy-probe starting with args: {:?}", cli);

    match run(&cli) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_FAILED),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ProbeReport> {
    let config = match &cli.config {
        Some(path) => ProbeConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProbeConfig::default(),
    };
    let registry = SnapshotRegistry::from_path(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;

    let capability = cli
        .capability
        .as_deref()
        .map_or_else(|| config.capability.clone(), CapabilityTag::new);
    let host_version = cli.host_version.as_deref().or(registry.host_version());

    let report = config
        .runner()
        .probe(&registry, &capability, &config.checks, host_version)
        .with_context(|| format!("registry listing for {capability} is malformed"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(report)
}
