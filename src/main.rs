//! Headless driver: prints saved progress and replays pointer traces.

use anyhow::{Context, Result};
use candy_abacus::abacus::{Abacus, AbacusConfig};
use candy_abacus::input::coords::ScreenTransform;
use candy_abacus::logging;
use candy_abacus::rewards::STICKERS;
use candy_abacus::storage::{FileStore, GameStore};
use candy_abacus::types::PointerEvent;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "candy-abacus", version, about = "Candy Abacus trainer core")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding the progress file (defaults to the platform data dir).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of saved progress (default).
    Summary,

    /// Replay a JSON pointer trace on a free practice abacus and print the total.
    Replay {
        #[arg(value_name = "TRACE")]
        trace: PathBuf,
    },
}

/// A recorded pointer session.
#[derive(Deserialize)]
struct Trace {
    #[serde(default)]
    transform: Option<ScreenTransform>,
    events: Vec<PointerEvent>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => summary(cli.data_dir),
        Command::Replay { trace } => replay(&trace),
    }
}

fn summary(data_dir: Option<PathBuf>) -> Result<()> {
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location().context("Failed to locate the data directory")?,
    };
    info!(dir = %store.dir().display(), "Loading progress");
    let data = GameStore::new(store).load();

    println!("candies:       {}", data.candies);
    println!("total correct: {}", data.total_correct);
    println!("streak:        {}", data.streak);
    println!(
        "today:         {} / {}",
        data.today_count(),
        data.settings.daily_limit
    );
    println!("difficulty:    {}", data.settings.difficulty.label());
    for sticker in STICKERS {
        let mark = if data.has_sticker(sticker.id) { "x" } else { " " };
        println!("[{mark}] {} ({})", sticker.name, sticker.requirement);
    }
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace {}", path.display()))?;
    let trace: Trace = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trace {}", path.display()))?;

    let mut abacus = Abacus::new(AbacusConfig::free_practice());
    if let Some(transform) = trace.transform {
        abacus.set_screen_transform(transform);
    }

    let changes = trace
        .events
        .iter()
        .filter(|event| abacus.handle_pointer(event))
        .count();
    info!(events = trace.events.len(), changes, "Trace replayed");

    let digits: Vec<String> = abacus.digits().iter().map(u8::to_string).collect();
    println!("digits: {}", digits.join(" "));
    println!("total:  {}", abacus.total());
    Ok(())
}
