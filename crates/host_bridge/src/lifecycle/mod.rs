//! Surface/activation lifecycle coordination
//!
//! Three lifecycles evolve independently: the application (foreground,
//! started), the rendering surface (exists, size, context generation) and
//! sensor delivery (desired, registered). The [`Coordinator`] folds them into
//! one ordered stream of [`EngineGateway`](crate::gateway::EngineGateway)
//! calls.

mod coordinator;
mod state;

pub use coordinator::Coordinator;
pub use state::{AppState, LifecyclePhase};

use thiserror::Error;

use crate::config::ConfigError;
use crate::gateway::GatewayError;

/// Errors raised while constructing a coordinator
///
/// Both are fatal to the surface instance: without an initialized engine no
/// lifecycle entry point is meaningful.
#[derive(Error, Debug)]
pub enum HostError {
    /// The engine refused to initialize
    #[error("Engine initialization failed: {0}")]
    Initialization(#[from] GatewayError),

    /// The host configuration is unusable
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
