//! Motion sensor capability
//!
//! The platform's sensor manager is injected into the coordinator as a
//! [`SensorService`]. Samples themselves do not flow through this trait; the
//! platform delivers them to [`Coordinator::on_sensor_sample`] on whatever
//! thread it likes.
//!
//! [`Coordinator::on_sensor_sample`]: crate::lifecycle::Coordinator::on_sensor_sample

mod virtual_device;

pub use virtual_device::{VirtualAccelerometer, VirtualSensorProbe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested sample delivery rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorDelay {
    /// As fast as the hardware allows
    Fastest,
    /// Suitable for games
    #[default]
    Game,
    /// Suitable for user interface updates
    Ui,
    /// Suitable for orientation changes
    Normal,
}

impl SensorDelay {
    /// Nominal interval between samples in microseconds
    pub const fn interval_micros(self) -> u32 {
        match self {
            Self::Fastest => 0,
            Self::Game => 20_000,
            Self::Ui => 66_667,
            Self::Normal => 200_000,
        }
    }
}

/// Sensor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The device has no accelerometer
    #[error("No accelerometer available")]
    Unavailable,

    /// The platform refused the listener
    #[error("Sensor registration failed: {0}")]
    RegistrationFailed(String),
}

/// Platform sensor manager
///
/// Implementations only toggle platform-side registration. Whether delivery is
/// *desired* is tracked by the coordinator, which calls these methods under its
/// lock.
pub trait SensorService: Send {
    /// Whether an accelerometer exists on this device
    fn has_accelerometer(&self) -> bool;

    /// Register for accelerometer samples at the given rate
    fn register(&mut self, delay: SensorDelay) -> Result<(), SensorError>;

    /// Stop accelerometer delivery; a no-op when not registered
    fn unregister(&mut self);
}

/// A platform without motion sensors
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSensors;

impl SensorService for NoSensors {
    fn has_accelerometer(&self) -> bool {
        false
    }

    fn register(&mut self, _delay: SensorDelay) -> Result<(), SensorError> {
        Err(SensorError::Unavailable)
    }

    fn unregister(&mut self) {}
}
