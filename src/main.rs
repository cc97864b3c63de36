use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use hostglance::app;
use hostglance::collectors::SysinfoSource;
use hostglance::report::Telemetry;

const DEFAULT_LOG_FILE: &str = "hostglance.log";

#[derive(Parser, Debug)]
#[command(name = "hostglance", version, about = "Host telemetry at a glance, refreshed every 5 seconds")]
struct Cli {
    /// Print one report to stdout and exit instead of starting the display.
    #[arg(long)]
    once: bool,

    /// Where to write logs (the terminal is taken by the display).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&Path>) -> Result<WorkerGuard> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), once = cli.once, "starting");

    if cli.once {
        let mut telemetry = Telemetry::new(SysinfoSource::new());
        println!("{}", telemetry.refresh());
        return Ok(());
    }

    let should_quit = Arc::new(AtomicBool::new(false));
    app::register_quit_flag(&should_quit).context("cannot register quit signal handlers")?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        app::restore_terminal();
        default_hook(info);
    }));

    let result = app::run(should_quit);
    app::restore_terminal();
    result.context("terminal display failed")?;

    tracing::info!("exiting");
    Ok(())
}
