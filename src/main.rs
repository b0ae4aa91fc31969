// Letter-addressed Sokoban over a ragged text grid.
// Map: '@' player, '*' player on goal, '-' floor, '+' goal, 'A'..'Z' boxes, 'a'..'z' boxes on goals,
// anything else is wall. Commands: a box letter then 8/2/4/6 pushes it, 0 undoes, newline prints, '.' quits.

mod config;
mod console_interface;
mod core;
mod error;
mod models;
#[cfg(test)]
mod test;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::config::Config;
use crate::console_interface::{
    cleanup_terminal, read_map, run_interactive, run_stream_session, setup_terminal,
};
use crate::core::{GameState, Grid};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Byte commands on stdin, boards printed to stdout
    Stream,
    /// Terminal UI
    Interactive,
}

#[derive(Parser, Debug)]
#[command(version, about = "Push lettered boxes around a text grid")]
struct Args {
    /// Map file; read from stdin up to the first empty line when omitted
    map: Option<PathBuf>,

    /// Config file [default: sokopush.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Stream)]
    mode: Mode,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let symbols = config.symbols()?;
    let controls = config.controls()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let map = match &args.map {
        Some(path) => read_map(&mut BufReader::new(File::open(path)?))?,
        None => read_map(&mut input)?,
    };
    let mut game = GameState::new(Grid::new(map), symbols);
    let grid = game.grid();
    info!(
        "loaded a {} byte map with {} boxes",
        grid.len(),
        grid.box_counts(&symbols).len()
    );
    let players = grid.count_players(&symbols);
    if players != 1 {
        warn!("map has {players} player markers, pushes assume exactly one");
    }

    match args.mode {
        Mode::Stream => {
            let mut output = io::stdout().lock();
            run_stream_session(&mut game, &controls, &mut input, &mut output)?;
        }
        Mode::Interactive => {
            drop(input);
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut game, &controls, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}
