//! Instrumented gateway that records every call
//!
//! Used by tests and by hosts that want a call trace without a real engine.
//! Besides recording, it detects overlapping calls: if a call begins while
//! another is still in flight the overlap is counted, which is exactly the
//! condition the coordinator's lock exists to prevent.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::{EngineGateway, EngineInit, GatewayError, HostRequests};

/// One recorded gateway call
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    /// `initialize`
    Initialize {
        /// Cache directory handed to the engine
        cache_dir: PathBuf,
        /// Storage directory handed to the engine
        storage_dir: PathBuf,
    },
    /// `activate`
    Activate,
    /// `deactivate`
    Deactivate,
    /// `set_visible`
    SetVisible {
        /// Whether the context was rebuilt
        context_recreated: bool,
        /// Surface width
        width: i32,
        /// Surface height
        height: i32,
    },
    /// `set_hidden`
    SetHidden,
    /// `render`
    Render,
    /// `dispatch_touch`
    DispatchTouch {
        /// Raw action code
        action: i32,
        /// Horizontal position
        x: f32,
        /// Vertical position
        y: f32,
    },
    /// `dispatch_motion_sample`
    DispatchMotionSample {
        /// Timestamp in seconds
        timestamp: f64,
        /// X axis
        x: f32,
        /// Y axis
        y: f32,
        /// Z axis
        z: f32,
    },
    /// `suspend_event_delivery`
    SuspendEventDelivery,
    /// `resume_event_delivery`
    ResumeEventDelivery,
}

#[derive(Debug, Default)]
struct Shared {
    calls: Mutex<Vec<GatewayCall>>,
    in_flight: AtomicBool,
    overlaps: AtomicU32,
    requests: Mutex<Option<HostRequests>>,
}

/// Gateway that records calls and detects overlap
///
/// Clones share the same log, so keep one clone and hand the other to the
/// coordinator.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    shared: Arc<Shared>,
    call_delay: Option<Duration>,
    fail_initialize: Option<String>,
    subscribe_sensor_on_init: bool,
}

impl RecordingGateway {
    /// Create a gateway with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every call for `delay`, widening any race window
    #[must_use]
    pub const fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = Some(delay);
        self
    }

    /// Make `initialize` fail with the given reason
    #[must_use]
    pub fn failing_initialize(mut self, reason: impl Into<String>) -> Self {
        self.fail_initialize = Some(reason.into());
        self
    }

    /// Request accelerometer delivery from inside `initialize`
    #[must_use]
    pub const fn subscribing_sensor_on_initialize(mut self) -> Self {
        self.subscribe_sensor_on_init = true;
        self
    }

    /// Snapshot of every call so far
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.shared
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded calls, excluding `initialize`
    pub fn calls_after_init(&self) -> Vec<GatewayCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, GatewayCall::Initialize { .. }))
            .collect()
    }

    /// Forget every recorded call
    pub fn clear(&self) {
        self.shared
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of recorded calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&GatewayCall) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    /// Number of calls that began while another was in flight
    pub fn overlapping_calls(&self) -> u32 {
        self.shared.overlaps.load(Ordering::SeqCst)
    }

    /// Request queue received at initialization, to act as the engine
    pub fn requests(&self) -> Option<HostRequests> {
        self.shared
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: GatewayCall) {
        if self.shared.in_flight.swap(true, Ordering::SeqCst) {
            self.shared.overlaps.fetch_add(1, Ordering::SeqCst);
            log::error!("Gateway call {call:?} began while another call was in flight");
        }

        self.shared
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);

        if let Some(delay) = self.call_delay {
            std::thread::sleep(delay);
        }

        self.shared.in_flight.store(false, Ordering::SeqCst);
    }
}

impl EngineGateway for RecordingGateway {
    fn initialize(&mut self, init: &EngineInit) -> Result<(), GatewayError> {
        self.record(GatewayCall::Initialize {
            cache_dir: init.cache_dir.clone(),
            storage_dir: init.storage_dir.clone(),
        });

        if let Some(reason) = &self.fail_initialize {
            return Err(GatewayError::InitializationFailed(reason.clone()));
        }

        *self
            .shared
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(init.requests.clone());

        if self.subscribe_sensor_on_init {
            init.requests.subscribe_sensor(true);
        }
        Ok(())
    }

    fn activate(&mut self) {
        self.record(GatewayCall::Activate);
    }

    fn deactivate(&mut self) {
        self.record(GatewayCall::Deactivate);
    }

    fn set_visible(&mut self, context_recreated: bool, width: i32, height: i32) {
        self.record(GatewayCall::SetVisible {
            context_recreated,
            width,
            height,
        });
    }

    fn set_hidden(&mut self) {
        self.record(GatewayCall::SetHidden);
    }

    fn render(&mut self) {
        self.record(GatewayCall::Render);
    }

    fn dispatch_touch(&mut self, action: i32, x: f32, y: f32) {
        self.record(GatewayCall::DispatchTouch { action, x, y });
    }

    fn dispatch_motion_sample(&mut self, timestamp: f64, x: f32, y: f32, z: f32) {
        self.record(GatewayCall::DispatchMotionSample { timestamp, x, y, z });
    }

    fn suspend_event_delivery(&mut self) {
        self.record(GatewayCall::SuspendEventDelivery);
    }

    fn resume_event_delivery(&mut self) {
        self.record(GatewayCall::ResumeEventDelivery);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() -> EngineInit {
        EngineInit {
            cache_dir: PathBuf::from("cache"),
            storage_dir: PathBuf::from("files"),
            requests: HostRequests::new(),
        }
    }

    #[test]
    fn test_clones_share_log() {
        let gateway = RecordingGateway::new();
        let mut engine = gateway.clone();

        engine.initialize(&init()).unwrap();
        engine.render();

        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(gateway.calls_after_init(), vec![GatewayCall::Render]);
        assert!(gateway.requests().is_some());
    }

    #[test]
    fn test_failing_initialize() {
        let mut gateway = RecordingGateway::new().failing_initialize("no GPU");
        assert_eq!(
            gateway.initialize(&init()),
            Err(GatewayError::InitializationFailed("no GPU".to_string()))
        );
    }

    #[test]
    fn test_sequential_calls_never_overlap() {
        let mut gateway = RecordingGateway::new();
        gateway.activate();
        gateway.render();
        gateway.deactivate();
        assert_eq!(gateway.overlapping_calls(), 0);
    }

    #[test]
    fn test_unsynchronized_calls_are_detected() {
        let gateway = RecordingGateway::new().with_call_delay(Duration::from_millis(50));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut gateway = gateway.clone();
                std::thread::spawn(move || gateway.render())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(gateway.overlapping_calls() > 0);
    }
}
