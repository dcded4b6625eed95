use anyhow::Context;
use tracing::{error, info};

use penalty_bot::logger::init_logger;
use penalty_bot::prelude::*;

fn main() -> anyhow::Result<()> {
    // configuration errors are reported before anything else happens
    let config = Configuration::from_env()?;
    init_logger(&config).context("could not initialise logging")?;
    info!(?config);

    let client = SubmissionClient::new(config)?;
    let mut strategy = RandomStrategy::new();

    match client.run_once(&mut strategy) {
        Ok(action) => {
            info!(opponents = action.shoot.len(), "submission done");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e).context("submission failed")
        }
    }
}
