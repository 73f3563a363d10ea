use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use boomslang::app::App;
use boomslang::scoreboard::ScoreStore;

/// A grid snake game with apples, bombs and a local scoreboard.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Scoreboard file (defaults to ./snake-scoreboard.json).
    #[arg(long)]
    scoreboard: Option<PathBuf>,

    /// Pre-filled username for score submission.
    #[arg(long, default_value = "")]
    username: String,

    /// Log file; stdout belongs to the board.
    #[arg(long, default_value = "boomslang.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&cli.log_file)?,
    )?;

    let store = cli
        .scoreboard
        .map(ScoreStore::new)
        .unwrap_or_else(ScoreStore::default_location);

    let mut app = App::new(store, cli.username);
    app.run()
}
