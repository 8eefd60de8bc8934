use std::fs::File;
use std::sync::{Arc, Mutex};

use quizmeme::clock::LocalClock;
use quizmeme::util::log;
use quizmeme::{App, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    log::init(&config.log_dir)?;

    // The terminal is owned by ratatui, so tracing output goes to a file.
    let trace_file = File::create(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .init();

    let app = App::new(&config, Arc::new(LocalClock))?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
