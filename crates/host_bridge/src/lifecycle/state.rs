//! Application-side lifecycle state

/// What the coordinator knows about the host application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// `Some(true)` after a resume, `Some(false)` after a pause, `None` on a
    /// fresh instance that has seen neither
    pub foreground: Option<bool>,
    /// The app window is started (a superset of foreground)
    pub started: bool,
    /// Desired subscription: the engine wants accelerometer samples
    pub sensor_subscribed: bool,
    /// The platform listener is registered right now
    pub sensor_delivering: bool,
    /// Delivery is held back between stop and restart
    pub delivery_suspended: bool,
    /// Last activation state sent to the engine; `None` before the first
    pub engine_active: Option<bool>,
}

/// Coarse summary of the coordinator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Engine initialized, no surface reported yet
    NoSurface,
    /// Surface shown, engine not running
    SurfaceInactive,
    /// Surface shown, engine running
    SurfaceActive,
    /// App paused; a resume re-evaluates surface readiness
    Backgrounded,
}

impl LifecyclePhase {
    /// Derive the phase from app state and surface existence
    pub const fn derive(app: &AppState, has_surface: bool) -> Self {
        if matches!(app.foreground, Some(false)) {
            Self::Backgrounded
        } else if !has_surface {
            Self::NoSurface
        } else if matches!(app.engine_active, Some(true)) {
            Self::SurfaceActive
        } else {
            Self::SurfaceInactive
        }
    }
}
