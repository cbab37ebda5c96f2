use anyhow::{Context, Error, Result};
use daily_push::{
    config::Config,
    utils::{init_tracing, run},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let config = Config::load().context("Failed to load configuration")?;

    init_tracing(config.verbose());

    run(&config).await.context("Daily push failed")?;

    Ok(())
}
