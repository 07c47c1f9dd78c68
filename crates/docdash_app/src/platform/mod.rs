mod app;
mod config;
mod effects;
mod flourish;
mod input;
mod logging;
mod persistence;
mod ui;

pub fn run() -> anyhow::Result<()> {
    let config = config::Config::from_args()?;
    logging::initialize(config.log_destination);
    app::run_app(config)
}
