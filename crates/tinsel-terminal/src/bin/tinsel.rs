//! tinsel: animated holiday card in the terminal
//!
//! Run: cargo run -p tinsel-terminal --bin tinsel

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use tinsel_terminal::{TinselApp, TinselConfig};

/// Layered character-grid holiday card with a Christmas countdown
#[derive(Debug, Parser)]
#[command(name = "tinsel", version, about, long_about = None)]
struct Cli {
    /// Path to custom config file (YAML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas height in rows
    #[arg(long)]
    rows: Option<u16>,

    /// Canvas width in columns
    #[arg(long)]
    cols: Option<u16>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Countdown timezone as whole hours from UTC
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    tz_offset: Option<i32>,

    /// Fix the ornament seed
    #[arg(long)]
    seed: Option<u64>,

    /// Render one frame to stdout and exit
    #[arg(long)]
    render_once: bool,

    /// Dump default configuration to stdout and exit
    #[arg(long)]
    dump_config: bool,

    /// Write logs to this file (stderr shares the card's screen)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay flags on top of file configuration.
    fn apply(&self, config: &mut TinselConfig) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(offset) = self.tz_offset {
            config.timezone_offset_hours = offset;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        // RUST_LOG still wins when set.
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", TinselConfig::default_yaml());
        return Ok(());
    }

    init_logging(cli.log_file.as_deref())?;
    log::info!("Starting tinsel...");

    let mut config = match &cli.config {
        Some(path) => TinselConfig::load_from_file(path)
            .with_context(|| format!("cannot load config from {}", path.display()))?,
        None => TinselConfig::load(),
    };
    cli.apply(&mut config);

    let mut app = TinselApp::new(config).context("invalid configuration")?;

    if cli.render_once {
        let grid = app.render_once().context("cannot render frame")?;
        let mut stdout = io::stdout().lock();
        for line in grid.lines() {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()?;
        return Ok(());
    }

    app.run().context("card stopped")?;
    log::info!("tinsel: exiting after {} frames", app.metrics().frame_count);
    Ok(())
}
