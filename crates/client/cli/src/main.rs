//! Console client entry point.
//!
//! Wires the loaded content catalogs and a seeded engine to the console
//! controller, then maps the campaign's end into the game's traditional
//! process exit codes.

mod console;

use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use clash_content::ContentCatalog;
use clash_core::{CombatError, Engine, EngineError, GameConfig, GameRng};
use console::ConsoleController;
use tracing_subscriber::EnvFilter;

/// Catalog files missing or malformed.
const EXIT_LOAD_FAILURE: i32 = 1;
/// SP invariant breach inside the engine.
const EXIT_SP_UNDERFLOW: i32 = 505;
/// Non-numeric input at a strict numeric prompt.
const EXIT_NOT_A_NUMBER: i32 = 58008;
/// The party was wiped; the run is over and scored.
const EXIT_DEFEATED: i32 = 707;

#[derive(Parser)]
#[command(name = "clash", about = "Turn-based party-combat campaign")]
struct Args {
    /// RNG seed for a reproducible run; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the RON catalogs; bundled data when omitted.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let data_dir = args
        .data_dir
        .unwrap_or_else(ContentCatalog::bundled_data_dir);
    let catalog = match ContentCatalog::load(&data_dir) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load game data: {err:#}");
            process::exit(EXIT_LOAD_FAILURE);
        }
    };

    let seed = args.seed.unwrap_or_else(entropy_seed);
    tracing::debug!(seed, "campaign seed");

    let stdin = std::io::stdin();
    let mut controller = ConsoleController::new(&catalog, BufReader::new(stdin.lock()));
    let mut engine = Engine::new(&catalog, GameConfig::default(), GameRng::seeded(seed));
    match engine.run(&mut controller) {
        Ok(outcome) => {
            println!("GG you survived {} battles!", outcome.battles_survived);
            process::exit(EXIT_DEFEATED);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(exit_code_for(&err));
        }
    }
}

fn exit_code_for(err: &EngineError) -> i32 {
    match err {
        EngineError::Combat(CombatError::SpUnderflow { .. }) => EXIT_SP_UNDERFLOW,
        EngineError::NotANumber { .. } => EXIT_NOT_A_NUMBER,
        EngineError::InputClosed => EXIT_LOAD_FAILURE,
    }
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
