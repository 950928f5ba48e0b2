//! In-process accelerometer for simulated hosts and tests

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use super::{SensorDelay, SensorError, SensorService};

#[derive(Debug, Default)]
struct Shared {
    registered: AtomicBool,
    refusing: AtomicBool,
    registrations: AtomicU32,
    refusals: AtomicU32,
    unregistrations: AtomicU32,
}

/// An accelerometer that exists only in memory
///
/// The coordinator owns the device; keep a [`VirtualSensorProbe`] to observe
/// registration from the outside, e.g. to decide whether a feeder thread
/// should currently be producing samples.
#[derive(Debug)]
pub struct VirtualAccelerometer {
    shared: Arc<Shared>,
    delay: Option<SensorDelay>,
}

impl VirtualAccelerometer {
    /// Create a device and a probe observing it
    pub fn new() -> (Self, VirtualSensorProbe) {
        let shared = Arc::new(Shared::default());
        let probe = VirtualSensorProbe {
            shared: Arc::clone(&shared),
        };
        (Self { shared, delay: None }, probe)
    }

    /// Refuse every registration from the start
    #[must_use]
    pub fn failing_registration(self) -> Self {
        self.shared.refusing.store(true, Ordering::SeqCst);
        self
    }

    /// Delivery rate of the current registration
    pub const fn delay(&self) -> Option<SensorDelay> {
        self.delay
    }
}

impl SensorService for VirtualAccelerometer {
    fn has_accelerometer(&self) -> bool {
        true
    }

    fn register(&mut self, delay: SensorDelay) -> Result<(), SensorError> {
        if self.shared.refusing.load(Ordering::SeqCst) {
            self.shared.refusals.fetch_add(1, Ordering::SeqCst);
            return Err(SensorError::RegistrationFailed("listener refused by device".to_string()));
        }
        self.delay = Some(delay);
        self.shared.registered.store(true, Ordering::SeqCst);
        self.shared.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn unregister(&mut self) {
        self.delay = None;
        if self.shared.registered.swap(false, Ordering::SeqCst) {
            self.shared.unregistrations.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Outside view of a [`VirtualAccelerometer`]
///
/// Observes registration and can make the device refuse new listeners.
#[derive(Debug, Clone)]
pub struct VirtualSensorProbe {
    shared: Arc<Shared>,
}

impl VirtualSensorProbe {
    /// Whether the platform listener is currently registered
    pub fn is_registered(&self) -> bool {
        self.shared.registered.load(Ordering::SeqCst)
    }

    /// Total successful registrations
    pub fn registrations(&self) -> u32 {
        self.shared.registrations.load(Ordering::SeqCst)
    }

    /// Registration attempts the device refused
    pub fn refusals(&self) -> u32 {
        self.shared.refusals.load(Ordering::SeqCst)
    }

    /// Make later registrations fail (or succeed again)
    pub fn set_refusing(&self, refusing: bool) {
        self.shared.refusing.store(refusing, Ordering::SeqCst);
    }

    /// Total unregistrations of a live listener
    pub fn unregistrations(&self) -> u32 {
        self.shared.unregistrations.load(Ordering::SeqCst)
    }
}
