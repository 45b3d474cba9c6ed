use std::rc::Rc;

use anyhow::Context;
use log::info;
use notifier::bus::NotifierError;
use observers::sink::LogSink;
use rand::thread_rng;
use thiserror::Error;

use crate::config::app::AppConfig;

mod config;
mod demo;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Notifier(#[from] NotifierError),
    #[error("Metrics gateway unavailable: {0}")]
    Gateway(#[from] std::io::Error),
}

fn main() -> anyhow::Result<()> {
    crate::config::log::init().context("Failed to initialize logging")?;

    let app_config = AppConfig::new().context("Failed to load configuration")?;
    info!("Running demo with policy {}", app_config.publish_policy);

    let mut rng = thread_rng();
    let report = demo::run_broadcast(&app_config, Rc::new(LogSink), &mut rng)?;
    info!(
        "Broadcast: published {} events, {} deliveries",
        report.published, report.deliveries
    );

    let report = demo::run(&app_config, Rc::new(LogSink), &mut rng)?;
    info!(
        "Filtered: published {} events, {} deliveries",
        report.published, report.deliveries
    );
    Ok(())
}
