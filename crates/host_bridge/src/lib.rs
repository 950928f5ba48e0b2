//! # Host Bridge
//!
//! Glue between a host application (window, surface, sensors) and an embedded
//! native engine reached through a narrow, non-reentrant gateway.
//!
//! ## Features
//!
//! - **Lifecycle Coordination**: Foreground/background, surface geometry and
//!   sensor subscription reconciled into one ordered stream of engine calls
//! - **Single Exclusion Domain**: Every engine call happens under one lock
//! - **Injected Platform Services**: Sensors, assets, media, keyboard and URL
//!   launching are trait objects, so hosts and tests can substitute them
//! - **Configurable**: TOML/RON configuration with sensible defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use host_bridge::prelude::*;
//!
//! fn main() -> Result<(), HostError> {
//!     let config = HostConfig::default();
//!     let gateway = RecordingGateway::new();
//!     let coordinator = Coordinator::new(&config, Box::new(gateway), Box::new(NoSensors))?;
//!
//!     coordinator.on_app_start();
//!     coordinator.on_app_resume();
//!     coordinator.on_surface_context_created();
//!     coordinator.on_surface_geometry(800, 600);
//!     coordinator.on_frame_tick();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod gateway;
pub mod input;
pub mod lifecycle;
pub mod sensor;
pub mod services;
pub mod surface;

pub use lifecycle::{Coordinator, HostError, LifecyclePhase};

/// Common imports for host integrations
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, HostConfig},
        events::HostEvent,
        gateway::{EngineGateway, EngineInit, GatewayCall, GatewayError, HostRequest, HostRequests, RecordingGateway},
        input::{MotionSample, PointerEvent, TouchAction},
        lifecycle::{Coordinator, HostError, LifecyclePhase},
        sensor::{NoSensors, SensorDelay, SensorError, SensorService},
        services::{HostServices, ServiceError},
    };
}
