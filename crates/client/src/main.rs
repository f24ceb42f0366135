//! Arena client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! installs logging, runs one session and prints the report to stdout.
//!
//! ```bash
//! # Reference scenario, narrated
//! cargo run -p arena-client
//!
//! # Custom scenario, JSON report, fixed seed
//! ARENA_SCENARIO=duel.ron ARENA_OUTPUT=json ARENA_SEED=7 cargo run -p arena-client
//! ```

use anyhow::Result;
use arena_client::{ClientConfig, Session, logging, presentation};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging (keep the guard alive until exit)
    let _guard = logging::setup_logging(&config.logging)?;
    tracing::info!("Starting arena client");
    tracing::debug!("Client configuration: {:?}", config);

    // 3. Resolve scenario and run
    let session = Session::prepare(&config)?;
    let outcome = session.run()?;

    // 4. Present
    let report = presentation::render(&outcome, config.output)?;
    println!("{report}");

    tracing::info!(
        "Session '{}' finished: {} events",
        outcome.scenario,
        outcome.log.events().len()
    );
    Ok(())
}
