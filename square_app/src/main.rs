//! Square demo
//!
//! Runs the square engine behind a simulated host. Pass a `.toml` or `.ron`
//! host configuration as the first argument to override the defaults.

mod simulation;
mod square_engine;

use std::sync::{Arc, PoisonError};

use host_bridge::config::{Config, ConfigError, HostConfig};
use host_bridge::foundation::logging;
use host_bridge::sensor::VirtualAccelerometer;
use host_bridge::services::HostServices;
use host_bridge::{Coordinator, HostError};
use thiserror::Error;

use square_engine::SquareEngine;

/// Errors that end the demo
#[derive(Error, Debug)]
pub enum DemoError {
    /// Configuration file could not be used
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Engine failed to come up
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// A simulated platform thread could not be spawned
    #[error("Thread error: {0}")]
    Thread(#[from] std::io::Error),

    /// A simulated platform thread panicked
    #[error("Thread {0} panicked")]
    ThreadPanicked(&'static str),
}

fn main() {
    if let Err(e) = run() {
        log::error!("Square demo failed: {e}");
        eprintln!("Square demo failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => HostConfig::load_from_file(&path)?,
        None => HostConfig::default(),
    };
    logging::init(&config.logging);
    log::info!("Starting square demo");

    let mut services = HostServices::headless(&config);
    match services.media.create("/sounds/pop.wav") {
        Ok(handle) => log::info!("Prepared sound effect {handle:?}"),
        Err(e) => log::warn!("Running without sound: {e}"),
    }

    let (engine, square) = SquareEngine::new(true);
    let (accelerometer, probe) = VirtualAccelerometer::new();
    let coordinator = Arc::new(Coordinator::new(
        &config,
        Box::new(engine),
        Box::new(accelerometer),
    )?);

    let report = simulation::run(&coordinator, probe)?;

    let square = square.lock().unwrap_or_else(PoisonError::into_inner);
    log::info!(
        "Done: {} frame ticks, {} input events, {} frames drawn, {} motion samples",
        report.frame_ticks,
        report.input_events,
        square.frames,
        square.samples
    );
    log::info!(
        "Square ended at ({:.2}, {:.2}), {} context upload(s), final phase {:?}",
        square.origin.x,
        square.origin.y,
        square.uploads,
        coordinator.phase()
    );
    Ok(())
}
