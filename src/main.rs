//! formrelay - booking form submission harness
//!
//! Reads a form snapshot as JSON from stdin, runs it through validation and
//! the submission lifecycle against the stub sender, and prints each emitted
//! UI event as a JSON line. Exits non-zero when the submission is rejected.

use std::io::Read;

use formrelay::error::Result;
use formrelay::{logging, Config, FormSnapshot, SubmissionController};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Validate configuration
    config.validate()?;

    // Initialize logging/tracing
    logging::init_tracing(&config.app.log_level, &config.app.environment)?;

    // Log configuration
    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting formrelay");

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let snapshot: FormSnapshot = serde_json::from_str(&input)?;

    let (controller, mut events) = SubmissionController::from_config(&config);
    let outcome = controller.submit(snapshot).await;

    while let Ok(event) = events.try_recv() {
        println!("{}", serde_json::to_string(&event)?);
    }

    match outcome {
        Ok(()) => {
            tracing::info!("Submission completed");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Submission was not accepted");
            Err(err)
        }
    }
}
