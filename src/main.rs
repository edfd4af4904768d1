use std::path::PathBuf;

use clap::Parser;
use focusgate::{
    app::{App, Prefill},
    config::FocusConfig,
    console,
    error::user_friendly_message,
    logging, Result,
};

/// Focus-mode countdown timer with a topic quiz gate
#[derive(Debug, Parser)]
#[command(name = "focusgate", version, about)]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Line-based mode without the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Topic to study
    #[arg(long)]
    topic: Option<String>,

    /// Countdown length in seconds
    #[arg(long, value_name = "SECS")]
    duration: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Application error: {}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => FocusConfig::load_from(path)?,
        None => FocusConfig::load()?,
    };
    if let Some(secs) = cli.duration {
        config = config.with_default_duration(secs);
    }
    config.validate()?;

    // Logging is best effort; the app still works without a log file
    match logging::init(&config.log_filter) {
        Ok(path) => tracing::info!(log = %path.display(), "focusgate starting"),
        Err(e) => eprintln!("Logging disabled: {}", user_friendly_message(&e)),
    }

    let prefill = Prefill {
        topic: cli.topic,
        duration_secs: cli.duration,
    };

    if cli.plain {
        let outcome = console::run_console(&config, &prefill).await?;
        tracing::info!(outcome = ?outcome, "console session finished");
        return Ok(());
    }

    let mut app = App::new(config, prefill)?;
    app.init()?;
    app.run().await
}
