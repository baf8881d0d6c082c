mod cli;
mod terminal;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use opswall_core::Config;
use opswall_rota::clock::{Clock, SystemClock};
use opswall_rota::loader::{load_document, load_file, CatalogStore};
use opswall_rota::validation::validate_document;
use opswall_rota::{range_view, resolve, today_view, week_view, FixedClock, Rotation};

use crate::cli::{CliArgs, Command};
use crate::terminal::Terminal;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    opswall_core::config::load_dotenv();
    let mut config = Config::from_env();

    let args = CliArgs::parse();
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }
    config.log_summary();

    let terminal = Terminal::new(args.json);
    let catalog_path = config.catalog.path.clone();
    let system_clock = SystemClock::from_config(&config.wall);

    match args.command {
        Command::Resolve { date } => {
            let date = date.unwrap_or_else(|| system_clock.today());
            terminal.print_resolve(date, &resolve(date))
        }
        Command::Lookup { week, day } => {
            let rotation = load(&catalog_path)?;
            let schedule = rotation
                .lookup(week, &day)
                .with_context(|| format!("lookup of week{} {} failed", week, day))?;
            terminal.print_schedule(&format!("week{} {}", week, day.trim().to_uppercase()), &schedule)
        }
        Command::Today { date } => {
            let rotation = load(&catalog_path)?;
            let plan = match date {
                Some(date) => today_view(&rotation, &FixedClock(date)),
                None => today_view(&rotation, &system_clock),
            };
            terminal.print_day(&plan)
        }
        Command::Week { date } => {
            let rotation = load(&catalog_path)?;
            let date = date.unwrap_or_else(|| system_clock.today());
            terminal.print_week(&week_view(&rotation, date))
        }
        Command::Range { from, to } => {
            let rotation = load(&catalog_path)?;
            let plans = range_view(&rotation, from, to)?;
            terminal.print_range(&plans)
        }
        Command::Validate => {
            let doc = load_document(&catalog_path)
                .with_context(|| format!("failed to read catalog {}", catalog_path.display()))?;
            let result = validate_document(&doc);
            terminal.print_validation(&result)?;
            if !result.valid {
                bail!("{} has {} validation error(s)", catalog_path.display(), result.errors.len());
            }
            Ok(())
        }
        Command::Config => terminal.print_config(&config),
        Command::Watch { refresh } => {
            let refresh = refresh.unwrap_or(config.wall.refresh_secs).max(1);
            run_wall(&terminal, catalog_path, &system_clock, Duration::from_secs(refresh))
        }
    }
}

fn load(path: &Path) -> Result<Rotation> {
    load_file(path).with_context(|| format!("failed to load catalog {}", path.display()))
}

/// Redraw today's view until interrupted. The catalog is reloaded by the
/// watcher thread; a broken edit keeps the last good rotation on screen.
fn run_wall(terminal: &Terminal, path: PathBuf, clock: &dyn Clock, refresh: Duration) -> Result<()> {
    let mut store = CatalogStore::open(&path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    store.watch().context("failed to start catalog watcher")?;
    info!(path = %path.display(), refresh_secs = refresh.as_secs(), "monitoring wall started");

    let mut shown_generation = 0;
    loop {
        let generation = store.generation();
        if generation != shown_generation && shown_generation != 0 {
            info!(generation, "catalog changed, redrawing");
        }
        shown_generation = generation;

        let rotation = store.snapshot();
        let plan = today_view(&rotation, clock);
        if let Err(e) = terminal.print_wall(&plan, generation) {
            warn!(error = %e, "failed to draw wall");
        }
        thread::sleep(refresh);
    }
}
