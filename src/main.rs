use anyhow::Result;
use clap::Parser;
use roster::cli::{execute, Cli};
use roster::{util, Config, RecordStore};
use std::fs::{self, OpenOptions};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (<data-dir>/logs/roster.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(backend) = cli.backend {
        config = config.with_backend(backend.into());
    }

    let store = RecordStore::with_keys(
        config.storage.open()?,
        config.storage.current_key.clone(),
        config.storage.legacy_key.clone(),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(
        cli.command,
        &store,
        config.default_week,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
