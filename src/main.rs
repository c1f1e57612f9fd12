use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rochade_console::Console;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    info!("rochade starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
