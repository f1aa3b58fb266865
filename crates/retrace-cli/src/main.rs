use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use retrace_core::compare::Comparison;
use retrace_observe::{LoggerConfig, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger};

mod render;
mod scenario;

use scenario::Scenario;

/// Compare retry backoff policies by simulating their schedules.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Scenario file with policies and budget (JSON). Omit for the built-in demo.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Retry budget override; clamped to at least 1.
    #[arg(long)]
    budget: Option<u32>,

    /// Seed for jitter draws; omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the chart frame as pretty JSON to this path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log level filter expression.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format: text or json.
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Timestamp timezone: utc or local.
    #[arg(long, default_value = "utc")]
    tz: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new(&cli.log_level)?,
        format: cli.log_format.parse()?,
        tz: cli.tz.parse()?,
        ..Default::default()
    };
    if cfg.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) scenario
    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo(),
    };

    // 3) comparison
    let mut board = match cli.seed.or(scenario.seed) {
        Some(seed) => Comparison::seeded(seed),
        None => Comparison::new(),
    };
    board.set_budget(cli.budget.unwrap_or(scenario.budget));
    for policy in scenario.policies {
        board.add(policy)?;
    }
    info!(policies = board.len(), budget = board.budget(), "comparison built");

    // 4) table
    print!("{}", render::render_table(&board));

    // 5) export
    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(board.frame())?;
        fs::write(path, json).with_context(|| format!("write frame to {}", path.display()))?;
        info!(path = %path.display(), "frame exported");
    }

    Ok(())
}
