use anyhow::Context;
use delta_time_shapes::{
    logging::{init_logging, LoggingConfig},
    window, DemoConfig,
};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::info!("starting \"{}\"", config.title);

    if let Err(e) = window::run(config) {
        log::error!("{e}");
        return Err(e).context("demo failed");
    }

    log::info!("bye");
    Ok(())
}
