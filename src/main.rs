//! Headless Edge-Shift runner (default binary).
//!
//! Plays a seeded game with the greedy move chooser until no queued shape
//! fits or the move limit is reached, then prints the final stats. Set
//! `RUST_LOG=debug` to follow every placement.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use edge_shift::core::{GameConfig, GameState};
use edge_shift::engine::{apply_move, best_move};

/// Play an Edge-Shift game headlessly with a greedy chooser.
#[derive(Debug, Parser)]
#[command(name = "edge-shift", version)]
struct Args {
    /// RNG seed; a random one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u32>,

    /// Stop after this many placements
    #[arg(short, long, default_value = "200", value_name = "N")]
    moves: u32,

    /// JSON config file (rows, cols, queue_size, catalog). Defaults to EDGE_SHIFT_* env vars.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => {
            let doc = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&doc)?
        }
        None => GameConfig::from_env()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let mut game = GameState::with_config(config, 0)?;
    game.new_game(args.seed);
    info!(
        "playing seed {} on {}x{} (queue {})",
        game.seed(),
        config.rows,
        config.cols,
        config.queue_size
    );

    while game.stats().moves < args.moves {
        let Some(mv) = best_move(&game) else {
            info!("no legal moves after {} placements", game.stats().moves);
            break;
        };
        apply_move(&mut game, &mv).with_context(|| format!("applying {:?}", mv))?;
        game.settle();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    let stats = game.stats();
    println!("seed:          {}", game.seed());
    println!("moves:         {}", stats.moves);
    println!("score:         {}", stats.score);
    println!("placed cells:  {}", stats.total_placed_blocks);
    println!("rows cleared:  {}", stats.lines_cleared_rows);
    println!("cols cleared:  {}", stats.lines_cleared_cols);
    println!("edge shifts:   {}", stats.edge_shifts);
    println!("max combo:     {}", stats.max_combo);
    Ok(())
}
