//! Binary entry point: read the store settings, open the single connection,
//! and hand it to the command loop until the user picks Exit.
use std::io;

use employee_tracker::config::load_dotenv;
use employee_tracker::{logging, open_store, App, StoreConfig, TerminalPrompter};

/// Any error returned here ends the process with the message and its
/// context chain printed to the terminal.
fn main() -> anyhow::Result<()> {
    // `.env` may carry RUST_LOG, so it has to be merged before the filter is built.
    let dotenv = load_dotenv();
    logging::init();
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = StoreConfig::from_env()?;
    let conn = open_store(&config)?;

    App::new(conn, TerminalPrompter::new(), io::stdout()).run()
}
