use anyhow::{Context, Result};
use clap::Parser;
use colonysim_core::{
    load_catalog, load_config, load_snapshot, validate_catalog, validate_snapshot, ActionQueue,
    CatalogEngine, ColonyPlanner, PlannerConfig, VisibleWorld,
};
use std::path::PathBuf;

/// Run one colony planning cycle over a recorded snapshot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World snapshot (JSON)
    #[arg(long)]
    snapshot: PathBuf,

    /// Building catalog (JSON)
    #[arg(long)]
    catalog: PathBuf,

    /// Planner configuration (JSON); built-in defaults if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the decision
    #[arg(long)]
    pretty: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = match &args.config {
        Some(path) => load_config(path).context("Failed to load planner config")?,
        None => PlannerConfig::default(),
    };
    let catalog = load_catalog(&args.catalog).context("Failed to load building catalog")?;
    validate_catalog(&catalog, &config.hub_kind).context("Invalid building catalog")?;
    let snapshot = load_snapshot(&args.snapshot).context("Failed to load snapshot")?;
    validate_snapshot(&snapshot, &catalog).context("Invalid snapshot")?;

    let planner = ColonyPlanner::new(config);
    let world = VisibleWorld::new(&snapshot, &catalog);
    let mut queue = ActionQueue::new();
    let handled = planner.run_chain(&world, &CatalogEngine, &mut queue);

    match handled {
        Some(check) => log::info!("Cycle handled by {} check", check),
        None => log::info!("Nothing to do this cycle"),
    }

    let decision = serde_json::json!({
        "check": handled.map(|c| c.name()),
        "commands": queue.into_commands(),
    });
    let out = if args.pretty {
        serde_json::to_string_pretty(&decision)?
    } else {
        serde_json::to_string(&decision)?
    };
    println!("{}", out);
    Ok(())
}
