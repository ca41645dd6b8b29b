use clap::{Parser, Subcommand};
use movegrid::gamemaster;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Snapshot directory holding latest.json and timestamp.txt.
    #[arg(global = true, short, long, default_value = "data")]
    gm: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the charged-move table (energy x power grid).
    Charged(cmd::charged::ChargedArgs),
    /// Render the fast-move table (per-turn rate grid).
    Fast(cmd::fast::FastArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!(dir = %cli.gm.display(), "loading game master snapshot");
    let snapshot = gamemaster::load_snapshot(&cli.gm).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });
    info!(templates = snapshot.gm.len(), "snapshot loaded");

    let result = match cli.command {
        Commands::Charged(args) => cmd::charged::run(args, &snapshot),
        Commands::Fast(args) => cmd::fast::run(args, &snapshot),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
