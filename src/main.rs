use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use trip_budget::config::{paths::DIR_ENV_VAR, Settings, TripPaths};
use trip_budget::intro::load_intro;
use trip_budget::mirror::{DocumentMirror, FileMirror, NullMirror};
use trip_budget::prompt::Prompter;
use trip_budget::session::Session;

#[derive(Parser)]
#[command(
    name = "trip-budget",
    version,
    about = "Interactive travel budget planner",
    long_about = "Plan a trip budget from the terminal. Enter your budget, trip length \
                  and daily spending target, add your expenses, and see how much you \
                  can spend per day. Each step is also written to a trip document."
)]
struct Cli {
    /// Directory holding settings, the log and the trip document
    #[arg(long, env = DIR_ENV_VAR)]
    data_dir: Option<PathBuf>,

    /// Do not write to the trip document
    #[arg(long)]
    no_mirror: bool,

    /// Disable colours and bold text
    #[arg(long)]
    plain: bool,

    /// Write debug-level entries to the log file
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(paths: &TripPaths, verbose: bool) -> Result<()> {
    paths
        .ensure_directories()
        .context("Failed to create data directory")?;

    // The terminal belongs to the session, so logs go to a file
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("trip_budget={}", level).parse()?),
        )
        .init();

    info!(verbose, "Logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TripPaths::with_base_dir(dir),
        None => TripPaths::new()?,
    };
    setup_logging(&paths, cli.verbose)?;

    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
        info!(path = %paths.settings_file().display(), "Default settings written");
    }

    let mut mirror: Box<dyn DocumentMirror> = if cli.no_mirror || !settings.mirror.enabled {
        Box::new(NullMirror)
    } else {
        let document = settings.mirror.document_path(&paths);
        info!(path = %document.display(), "Mirroring session to trip document");
        Box::new(FileMirror::new(document))
    };

    let intro = load_intro(&settings.intro_path(&paths));
    let styled = settings.styled_output && !cli.plain && io::stdout().is_terminal();

    let prompter = Prompter::new(io::stdin().lock(), io::stdout()).with_style(styled);
    let result = Session::new(prompter, mirror.as_mut(), settings)
        .with_intro(intro)
        .run();
    if let Err(e) = result {
        if e.is_input_closed() {
            warn!("Input closed before the session finished");
        }
        return Err(e.into());
    }

    Ok(())
}
