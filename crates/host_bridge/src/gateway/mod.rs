//! Engine gateway
//!
//! The single point through which the embedded engine is reached. The
//! coordinator is the only caller, and it never calls two gateway methods at
//! the same time.
//!
//! # Threading
//! Implementations must be `Send` because the coordinator may be driven from
//! any thread, but they are never called concurrently and need no internal
//! locking. Calls may block; a slow `render` simply delays every other entry
//! point.

mod recording;
mod requests;

pub use recording::{GatewayCall, RecordingGateway};
pub use requests::{HostRequest, HostRequests};

use std::path::PathBuf;
use thiserror::Error;

/// Gateway errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The engine could not be brought up
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// The engine library or one of its resources is missing
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),
}

/// Everything the engine receives at initialization
#[derive(Debug, Clone)]
pub struct EngineInit {
    /// Scratch directory the engine may wipe
    pub cache_dir: PathBuf,
    /// Persistent storage directory
    pub storage_dir: PathBuf,
    /// Channel for asking the host to change its own state
    pub requests: HostRequests,
}

/// Narrow synchronous interface to the native engine
///
/// Only [`initialize`](Self::initialize) can fail. Every other call is assumed
/// to succeed or to leave recovery to the engine itself.
pub trait EngineGateway: Send {
    /// Bring the engine up; called exactly once, before anything else
    fn initialize(&mut self, init: &EngineInit) -> Result<(), GatewayError>;

    /// Enter running/foreground mode
    fn activate(&mut self);

    /// Leave running/foreground mode
    ///
    /// May arrive without a preceding activation.
    fn deactivate(&mut self);

    /// A surface of the given size is ready to draw into
    ///
    /// `context_recreated` is true when the graphics context was rebuilt and
    /// every GPU resource has to be uploaded again.
    fn set_visible(&mut self, context_recreated: bool, width: i32, height: i32);

    /// The surface is no longer shown
    fn set_hidden(&mut self);

    /// Draw one frame
    fn render(&mut self);

    /// Pointer input, raw action code and surface coordinates
    fn dispatch_touch(&mut self, action: i32, x: f32, y: f32);

    /// Accelerometer sample, timestamp in seconds
    fn dispatch_motion_sample(&mut self, timestamp: f64, x: f32, y: f32, z: f32);

    /// Sensor delivery was paused because the app went to the background
    fn suspend_event_delivery(&mut self);

    /// Sensor delivery resumed after the app came back
    fn resume_event_delivery(&mut self);
}
