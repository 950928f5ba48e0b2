//! The lifecycle coordinator
//!
//! One mutex guards the gateway together with all lifecycle state, and it is
//! held across every gateway call. This serializes the engine completely: a
//! long `render` blocks every other entry point until it returns.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::state::{AppState, LifecyclePhase};
use super::HostError;
use crate::config::HostConfig;
use crate::events::HostEvent;
use crate::gateway::{EngineGateway, EngineInit, HostRequest, HostRequests};
use crate::sensor::{SensorDelay, SensorService};
use crate::surface::{SurfaceSize, SurfaceState};

/// Serializes host lifecycle events into ordered engine calls
///
/// Every entry point is a blocking call that is safe to invoke from any
/// thread. Calls are totally ordered by lock acquisition and each one runs to
/// completion, gateway call included, before the next begins.
pub struct Coordinator {
    inner: Mutex<Inner>,
}

struct Inner {
    gateway: Box<dyn EngineGateway>,
    sensors: Box<dyn SensorService>,
    sensor_delay: SensorDelay,
    requests: HostRequests,
    surface: SurfaceState,
    app: AppState,
}

impl Coordinator {
    /// Initialize the engine and create the coordinator
    ///
    /// This is the only fallible operation. On error no coordinator exists and
    /// the surface instance cannot be used.
    pub fn new(
        config: &HostConfig,
        mut gateway: Box<dyn EngineGateway>,
        sensors: Box<dyn SensorService>,
    ) -> Result<Self, HostError> {
        config.validate()?;

        let requests = HostRequests::new();
        let init = EngineInit {
            cache_dir: config.paths.cache_dir.clone(),
            storage_dir: config.paths.storage_dir.clone(),
            requests: requests.clone(),
        };

        log::info!(
            "Initializing engine (cache: {}, storage: {})",
            init.cache_dir.display(),
            init.storage_dir.display()
        );
        gateway.initialize(&init)?;

        let mut inner = Inner {
            gateway,
            sensors,
            sensor_delay: config.sensor.delay,
            requests,
            surface: SurfaceState::new(),
            app: AppState::default(),
        };
        inner.apply_requests();

        log::info!("Engine initialized");
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    /// Lock for an entry point; engine requests queued since the last call
    /// are applied first
    fn lock(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.peek();
        inner.apply_requests();
        inner
    }

    /// Lock for a read-only query; queued requests stay queued
    fn peek(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The application was resumed
    ///
    /// Activates immediately when a surface exists, otherwise defers the
    /// activation until the first geometry report.
    pub fn on_app_resume(&self) {
        let mut inner = self.lock();
        inner.app.foreground = Some(true);

        if inner.surface.defer_activation() {
            log::info!("Resume before surface exists, activation deferred");
        } else {
            inner.activate();
        }
    }

    /// The application was paused
    ///
    /// Always deactivates, regardless of surface or pending state, and drops
    /// any deferred activation.
    pub fn on_app_pause(&self) {
        let mut inner = self.lock();
        inner.app.foreground = Some(false);
        inner.surface.cancel_pending_activation();
        inner.deactivate();
    }

    /// The application window was started
    pub fn on_app_start(&self) {
        let mut inner = self.lock();
        inner.app.started = true;

        if inner.surface.has_surface() {
            inner.show();
        } else {
            log::debug!("Start without surface, nothing to show yet");
        }
    }

    /// The application window was stopped
    ///
    /// Hides the surface, then suspends sensor delivery while keeping the
    /// desired subscription.
    pub fn on_app_stop(&self) {
        let mut inner = self.lock();
        inner.app.started = false;
        inner.call(|gateway| gateway.set_hidden());

        inner.app.delivery_suspended = true;
        if inner.app.sensor_delivering {
            log::debug!("Suspending accelerometer delivery");
            inner.sensors.unregister();
            inner.app.sensor_delivering = false;
            inner.call(|gateway| gateway.suspend_event_delivery());
        }
    }

    /// The application is restarting after a stop
    ///
    /// Restores sensor delivery only when it is still desired.
    pub fn on_app_restart(&self) {
        let mut inner = self.lock();
        inner.app.delivery_suspended = false;

        if inner.app.sensor_subscribed && !inner.app.sensor_delivering && inner.register_sensor() {
            log::debug!("Resuming accelerometer delivery");
            inner.call(|gateway| gateway.resume_event_delivery());
        }
    }

    /// A graphics context was created or recreated
    ///
    /// The engine learns about it with the next geometry report, since it
    /// needs dimensions to rebuild anything.
    pub fn on_surface_context_created(&self) {
        let mut inner = self.lock();
        inner.surface.mark_context_recreated();
        log::debug!("Graphics context (re)created");
    }

    /// The surface reported its drawable size
    ///
    /// A report counts as a change when either dimension differs. Changes run
    /// the show sequence, as does any report following a context recreation;
    /// other identical reports are ignored.
    pub fn on_surface_geometry(&self, width: i32, height: i32) {
        let size = SurfaceSize::new(width, height);
        if !size.is_valid() {
            log::warn!("Ignoring invalid surface geometry {width}x{height}");
            return;
        }

        let mut inner = self.lock();
        let changed = inner.surface.apply_geometry(size);
        if changed || inner.surface.context_recreated() {
            log::info!("Surface geometry {width}x{height}");
            inner.show();
        } else {
            log::trace!("Surface geometry unchanged at {width}x{height}");
        }
    }

    /// The rendering subsystem produced a frame slot
    pub fn on_frame_tick(&self) {
        let mut inner = self.lock();
        if !inner.surface.has_surface() {
            log::trace!("Frame tick before any surface, skipped");
            return;
        }
        inner.call(|gateway| gateway.render());
    }

    /// Pointer input, forwarded unchanged
    ///
    /// Always returns `true`: the engine claims every pointer event.
    pub fn on_pointer_event(&self, action: i32, x: f32, y: f32) -> bool {
        let mut inner = self.lock();
        inner.call(|gateway| gateway.dispatch_touch(action, x, y));
        true
    }

    /// Accelerometer sample, forwarded only while delivery is registered
    ///
    /// Samples racing an unsubscribe are dropped silently.
    pub fn on_sensor_sample(&self, timestamp: f64, x: f32, y: f32, z: f32) {
        let mut inner = self.lock();
        if !inner.app.sensor_delivering {
            log::trace!("Dropping motion sample at {timestamp:.3}s, delivery not registered");
            return;
        }
        inner.call(|gateway| gateway.dispatch_motion_sample(timestamp, x, y, z));
    }

    /// Change the desired accelerometer subscription from the host side
    ///
    /// Engine code running inside a gateway call must use
    /// [`HostRequests::subscribe_sensor`] instead; calling this from there
    /// would deadlock.
    pub fn set_sensor_subscription(&self, subscribe: bool) {
        let mut inner = self.lock();
        inner.set_subscription(subscribe);
    }

    /// Route a typed event to its entry point
    ///
    /// Returns `true` when the event was consumed (pointer events always are).
    pub fn dispatch(&self, event: HostEvent) -> bool {
        match event {
            HostEvent::Resume => self.on_app_resume(),
            HostEvent::Pause => self.on_app_pause(),
            HostEvent::Start => self.on_app_start(),
            HostEvent::Stop => self.on_app_stop(),
            HostEvent::Restart => self.on_app_restart(),
            HostEvent::SurfaceCreated => self.on_surface_context_created(),
            HostEvent::SurfaceResized { width, height } => self.on_surface_geometry(width, height),
            HostEvent::Frame => self.on_frame_tick(),
            HostEvent::Pointer(event) => return self.on_pointer_event(event.action, event.x, event.y),
            HostEvent::Motion(sample) => {
                self.on_sensor_sample(sample.timestamp, sample.x, sample.y, sample.z);
            }
        }
        false
    }

    /// Coarse state machine position
    pub fn phase(&self) -> LifecyclePhase {
        let inner = self.peek();
        LifecyclePhase::derive(&inner.app, inner.surface.has_surface())
    }

    /// Snapshot of the surface bookkeeping
    pub fn surface_state(&self) -> SurfaceState {
        self.peek().surface.clone()
    }

    /// Snapshot of the application bookkeeping
    pub fn app_state(&self) -> AppState {
        self.peek().app.clone()
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        if inner.app.sensor_delivering {
            inner.sensors.unregister();
            inner.app.sensor_delivering = false;
        }
        log::info!("Coordinator torn down, releasing engine");
    }
}

impl Inner {
    /// Run one gateway call, then apply whatever the engine requested during it
    fn call(&mut self, f: impl FnOnce(&mut dyn EngineGateway)) {
        f(self.gateway.as_mut());
        self.apply_requests();
    }

    fn activate(&mut self) {
        if self.app.engine_active == Some(true) {
            log::debug!("Engine already active, activate suppressed");
            return;
        }
        log::info!("Activating engine");
        self.call(|gateway| gateway.activate());
        self.app.engine_active = Some(true);
    }

    fn deactivate(&mut self) {
        if self.app.engine_active == Some(false) {
            log::debug!("Engine already inactive, deactivate suppressed");
            return;
        }
        log::info!("Deactivating engine");
        self.call(|gateway| gateway.deactivate());
        self.app.engine_active = Some(false);
    }

    /// Show sequence: visible notification, then any deferred activation
    fn show(&mut self) {
        let Some(size) = self.surface.size() else {
            return;
        };
        let context_recreated = self.surface.take_context_recreated();
        log::debug!(
            "Showing surface {}x{} (context recreated: {context_recreated})",
            size.width,
            size.height
        );
        self.call(|gateway| gateway.set_visible(context_recreated, size.width, size.height));

        if self.surface.take_activation_pending() {
            self.activate();
        }
    }

    fn apply_requests(&mut self) {
        for request in self.requests.drain() {
            match request {
                HostRequest::SubscribeSensor(subscribe) => self.set_subscription(subscribe),
            }
        }
    }

    fn set_subscription(&mut self, subscribe: bool) {
        if !subscribe {
            self.app.sensor_subscribed = false;
            if self.app.sensor_delivering {
                self.sensors.unregister();
                self.app.sensor_delivering = false;
            }
            log::info!("Accelerometer unsubscribed");
            return;
        }

        if !self.sensors.has_accelerometer() {
            log::warn!("Accelerometer requested but none is present");
            self.app.sensor_subscribed = false;
            return;
        }

        self.app.sensor_subscribed = true;
        if self.app.delivery_suspended {
            log::info!("Accelerometer subscribed, delivery starts on restart");
        } else if !self.app.sensor_delivering && self.register_sensor() {
            log::info!("Accelerometer subscribed");
        }
    }

    /// Register the platform listener; on failure the subscription is dropped
    fn register_sensor(&mut self) -> bool {
        match self.sensors.register(self.sensor_delay) {
            Ok(()) => {
                self.app.sensor_delivering = true;
                true
            }
            Err(e) => {
                log::warn!("Accelerometer registration failed: {e}");
                self.app.sensor_subscribed = false;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayCall, RecordingGateway};
    use crate::sensor::{NoSensors, VirtualAccelerometer, VirtualSensorProbe};

    fn coordinator() -> (Coordinator, RecordingGateway) {
        let gateway = RecordingGateway::new();
        let coordinator =
            Coordinator::new(&HostConfig::default(), Box::new(gateway.clone()), Box::new(NoSensors))
                .unwrap();
        (coordinator, gateway)
    }

    fn with_accelerometer() -> (Coordinator, RecordingGateway, VirtualSensorProbe) {
        let gateway = RecordingGateway::new();
        let (device, probe) = VirtualAccelerometer::new();
        let coordinator =
            Coordinator::new(&HostConfig::default(), Box::new(gateway.clone()), Box::new(device))
                .unwrap();
        (coordinator, gateway, probe)
    }

    const fn visible(context_recreated: bool, width: i32, height: i32) -> GatewayCall {
        GatewayCall::SetVisible {
            context_recreated,
            width,
            height,
        }
    }

    #[test]
    fn test_construct_initializes_engine_once() {
        let (coordinator, gateway) = coordinator();
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], GatewayCall::Initialize { .. }));
        assert_eq!(coordinator.phase(), LifecyclePhase::NoSurface);
    }

    #[test]
    fn test_failed_initialize_is_fatal() {
        let gateway = RecordingGateway::new().failing_initialize("library missing");
        let result = Coordinator::new(&HostConfig::default(), Box::new(gateway), Box::new(NoSensors));
        assert!(matches!(result, Err(HostError::Initialization(_))));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let mut config = HostConfig::default();
        config.paths.storage_dir = std::path::PathBuf::new();
        let gateway = RecordingGateway::new();
        let result = Coordinator::new(&config, Box::new(gateway.clone()), Box::new(NoSensors));
        assert!(matches!(result, Err(HostError::Config(_))));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_resume_before_geometry_defers_activation() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_app_resume();
        assert!(gateway.calls_after_init().is_empty());
        assert!(coordinator.surface_state().activation_pending());

        coordinator.on_surface_geometry(800, 600);
        assert_eq!(
            gateway.calls_after_init(),
            vec![visible(true, 800, 600), GatewayCall::Activate]
        );
        assert!(!coordinator.surface_state().activation_pending());
        assert_eq!(coordinator.phase(), LifecyclePhase::SurfaceActive);
    }

    #[test]
    fn test_geometry_before_resume_activates_on_resume() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        assert_eq!(gateway.calls_after_init(), vec![visible(true, 800, 600)]);
        assert_eq!(coordinator.phase(), LifecyclePhase::SurfaceInactive);

        coordinator.on_app_resume();
        assert_eq!(
            gateway.calls_after_init(),
            vec![visible(true, 800, 600), GatewayCall::Activate]
        );
    }

    #[test]
    fn test_pause_without_surface_deactivates() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_app_pause();
        assert_eq!(gateway.calls_after_init(), vec![GatewayCall::Deactivate]);
        assert_eq!(coordinator.phase(), LifecyclePhase::Backgrounded);

        coordinator.on_app_resume();
        assert_eq!(coordinator.phase(), LifecyclePhase::NoSurface);
    }

    #[test]
    fn test_pause_cancels_deferred_activation() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_app_resume();
        coordinator.on_app_pause();
        coordinator.on_surface_geometry(640, 480);

        assert_eq!(
            gateway.calls_after_init(),
            vec![GatewayCall::Deactivate, visible(true, 640, 480)]
        );
    }

    #[test]
    fn test_identical_geometry_is_ignored() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_surface_geometry(800, 600);
        assert_eq!(gateway.count(|call| matches!(call, GatewayCall::SetVisible { .. })), 1);
    }

    #[test]
    fn test_single_axis_resize_is_a_change() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_surface_geometry(800, 480);
        assert_eq!(
            gateway.calls_after_init(),
            vec![visible(true, 800, 600), visible(false, 800, 480)]
        );
    }

    #[test]
    fn test_same_geometry_after_context_loss_is_shown() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_surface_context_created();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_surface_geometry(800, 600);
        assert_eq!(
            gateway.calls_after_init(),
            vec![visible(true, 800, 600), visible(true, 800, 600)]
        );
    }

    #[test]
    fn test_negative_geometry_rejected() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_app_resume();
        coordinator.on_surface_geometry(-1, 600);
        assert!(gateway.calls_after_init().is_empty());
        assert!(!coordinator.surface_state().has_surface());
    }

    #[test]
    fn test_frame_tick_before_surface_is_skipped() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_frame_tick();
        assert!(gateway.calls_after_init().is_empty());

        coordinator.on_surface_geometry(320, 240);
        coordinator.on_frame_tick();
        assert_eq!(gateway.count(|call| *call == GatewayCall::Render), 1);
    }

    #[test]
    fn test_start_shows_existing_surface_with_context_flag() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_app_stop();
        coordinator.on_surface_context_created();
        coordinator.on_app_restart();
        coordinator.on_app_start();

        assert_eq!(
            gateway.calls_after_init(),
            vec![visible(true, 800, 600), GatewayCall::SetHidden, visible(true, 800, 600)]
        );
        assert!(!coordinator.surface_state().context_recreated());
    }

    #[test]
    fn test_start_without_surface_is_noop() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_app_start();
        assert!(gateway.calls_after_init().is_empty());
        assert!(coordinator.app_state().started);
    }

    #[test]
    fn test_duplicate_activation_suppressed() {
        let (coordinator, gateway) = coordinator();
        coordinator.on_surface_geometry(800, 600);
        coordinator.on_app_resume();
        coordinator.on_app_resume();
        coordinator.on_app_pause();
        coordinator.on_app_pause();

        assert_eq!(gateway.count(|call| *call == GatewayCall::Activate), 1);
        assert_eq!(gateway.count(|call| *call == GatewayCall::Deactivate), 1);
    }

    #[test]
    fn test_pointer_events_always_consumed() {
        let (coordinator, gateway) = coordinator();
        assert!(coordinator.on_pointer_event(0, 12.5, 40.0));
        assert_eq!(
            gateway.calls_after_init(),
            vec![GatewayCall::DispatchTouch { action: 0, x: 12.5, y: 40.0 }]
        );
    }

    #[test]
    fn test_stop_restart_without_subscription_is_quiet() {
        let (coordinator, gateway, probe) = with_accelerometer();
        coordinator.on_app_stop();
        gateway.clear();
        coordinator.on_app_restart();

        assert!(gateway.calls().is_empty());
        assert_eq!(probe.registrations(), 0);
    }

    #[test]
    fn test_stop_restart_restores_subscription() {
        let (coordinator, gateway, probe) = with_accelerometer();
        coordinator.set_sensor_subscription(true);
        assert!(probe.is_registered());

        coordinator.on_app_stop();
        assert!(!probe.is_registered());
        assert!(coordinator.app_state().sensor_subscribed);

        coordinator.on_app_restart();
        assert!(probe.is_registered());
        assert_eq!(
            gateway.calls_after_init(),
            vec![
                GatewayCall::SetHidden,
                GatewayCall::SuspendEventDelivery,
                GatewayCall::ResumeEventDelivery
            ]
        );
    }

    #[test]
    fn test_samples_dropped_while_not_delivering() {
        let (coordinator, gateway, _probe) = with_accelerometer();
        coordinator.on_sensor_sample(1.0, 0.0, 9.8, 0.0);
        assert!(gateway.calls_after_init().is_empty());

        coordinator.set_sensor_subscription(true);
        coordinator.on_sensor_sample(2.0, 0.0, 9.8, 0.0);
        coordinator.set_sensor_subscription(false);
        coordinator.on_sensor_sample(3.0, 0.0, 9.8, 0.0);

        assert_eq!(
            gateway.calls_after_init(),
            vec![GatewayCall::DispatchMotionSample { timestamp: 2.0, x: 0.0, y: 9.8, z: 0.0 }]
        );
    }

    #[test]
    fn test_missing_accelerometer_degrades() {
        let (coordinator, gateway) = coordinator();
        coordinator.set_sensor_subscription(true);
        assert!(!coordinator.app_state().sensor_subscribed);

        coordinator.on_app_stop();
        coordinator.on_app_restart();
        assert_eq!(gateway.calls_after_init(), vec![GatewayCall::SetHidden]);
    }

    #[test]
    fn test_subscription_while_stopped_waits_for_restart() {
        let (coordinator, _gateway, probe) = with_accelerometer();
        coordinator.on_app_stop();
        coordinator.set_sensor_subscription(true);
        assert!(!probe.is_registered());

        coordinator.on_app_restart();
        assert!(probe.is_registered());
    }

    #[test]
    fn test_refused_subscription_degrades() {
        let gateway = RecordingGateway::new();
        let (device, probe) = VirtualAccelerometer::new();
        let coordinator = Coordinator::new(
            &HostConfig::default(),
            Box::new(gateway.clone()),
            Box::new(device.failing_registration()),
        )
        .unwrap();

        coordinator.set_sensor_subscription(true);
        assert!(!coordinator.app_state().sensor_subscribed);
        assert!(!coordinator.app_state().sensor_delivering);
        assert_eq!(probe.refusals(), 1);

        coordinator.on_app_stop();
        coordinator.on_app_restart();
        assert_eq!(gateway.calls_after_init(), vec![GatewayCall::SetHidden]);
        assert_eq!(probe.refusals(), 1);
    }

    #[test]
    fn test_refused_restart_drops_subscription() {
        let (coordinator, gateway, probe) = with_accelerometer();
        coordinator.set_sensor_subscription(true);
        coordinator.on_app_stop();

        probe.set_refusing(true);
        coordinator.on_app_restart();
        assert!(!probe.is_registered());
        assert!(!coordinator.app_state().sensor_subscribed);
        assert!(!coordinator.app_state().sensor_delivering);
        assert_eq!(probe.refusals(), 1);

        coordinator.on_sensor_sample(1.0, 0.0, 9.8, 0.0);

        probe.set_refusing(false);
        coordinator.on_app_stop();
        coordinator.on_app_restart();
        assert_eq!(probe.registrations(), 1);
        assert!(!probe.is_registered());

        assert_eq!(
            gateway.calls_after_init(),
            vec![
                GatewayCall::SetHidden,
                GatewayCall::SuspendEventDelivery,
                GatewayCall::SetHidden,
            ]
        );
        assert_eq!(gateway.count(|call| *call == GatewayCall::ResumeEventDelivery), 0);
    }

    #[test]
    fn test_engine_request_during_initialize() {
        let gateway = RecordingGateway::new().subscribing_sensor_on_initialize();
        let (device, probe) = VirtualAccelerometer::new();
        let coordinator =
            Coordinator::new(&HostConfig::default(), Box::new(gateway.clone()), Box::new(device))
                .unwrap();

        assert!(probe.is_registered());
        assert!(coordinator.app_state().sensor_subscribed);
    }

    #[test]
    fn test_engine_request_applied_at_next_entry_point() {
        let (coordinator, gateway, probe) = with_accelerometer();
        let requests = gateway.requests().unwrap();

        requests.subscribe_sensor(true);
        assert!(!probe.is_registered());

        coordinator.on_frame_tick();
        assert!(probe.is_registered());
        assert_eq!(requests.pending(), 0);
    }

    #[test]
    fn test_queries_leave_engine_requests_queued() {
        let (coordinator, gateway, probe) = with_accelerometer();
        let requests = gateway.requests().unwrap();
        requests.subscribe_sensor(true);

        assert_eq!(coordinator.phase(), LifecyclePhase::NoSurface);
        assert!(!coordinator.app_state().sensor_subscribed);
        assert!(!coordinator.surface_state().has_surface());
        assert!(!probe.is_registered());
        assert_eq!(requests.pending(), 1);

        coordinator.on_frame_tick();
        assert!(probe.is_registered());
        assert_eq!(requests.pending(), 0);
    }

    #[test]
    fn test_drop_releases_sensor() {
        let (coordinator, _gateway, probe) = with_accelerometer();
        coordinator.set_sensor_subscription(true);
        drop(coordinator);
        assert!(!probe.is_registered());
    }

    #[test]
    fn test_dispatch_routes_events() {
        let (coordinator, gateway) = coordinator();
        assert!(!coordinator.dispatch(HostEvent::SurfaceCreated));
        assert!(!coordinator.dispatch(HostEvent::SurfaceResized { width: 100, height: 50 }));
        assert!(!coordinator.dispatch(HostEvent::Resume));
        assert!(!coordinator.dispatch(HostEvent::Frame));
        assert!(coordinator.dispatch(HostEvent::Pointer(crate::input::PointerEvent {
            action: 1,
            x: 1.0,
            y: 2.0
        })));

        assert_eq!(
            gateway.calls_after_init(),
            vec![
                visible(true, 100, 50),
                GatewayCall::Activate,
                GatewayCall::Render,
                GatewayCall::DispatchTouch { action: 1, x: 1.0, y: 2.0 }
            ]
        );
    }
}
