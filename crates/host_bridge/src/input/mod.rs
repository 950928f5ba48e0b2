//! Pointer and motion input types
//!
//! The coordinator forwards input to the engine exactly as the platform
//! reported it. These types exist for event sources and gateway
//! implementations that want typed views of the raw values.

/// Pointer action as reported by the platform's raw action code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// Finger went down
    Down,
    /// Finger lifted
    Up,
    /// Finger moved while down
    Move,
    /// Any other platform action (cancel, secondary pointers, ...)
    Other(i32),
}

impl TouchAction {
    /// Map a raw platform action code
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Move,
            other => Self::Other(other),
        }
    }

    /// Raw platform action code
    pub const fn code(self) -> i32 {
        match self {
            Self::Down => 0,
            Self::Up => 1,
            Self::Move => 2,
            Self::Other(code) => code,
        }
    }
}

impl From<i32> for TouchAction {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// A single pointer event in surface coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Raw platform action code
    pub action: i32,
    /// Horizontal position in pixels
    pub x: f32,
    /// Vertical position in pixels
    pub y: f32,
}

impl PointerEvent {
    /// Create a pointer event from a typed action
    pub const fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self {
            action: action.code(),
            x,
            y,
        }
    }

    /// Typed view of the action code
    pub const fn touch_action(&self) -> TouchAction {
        TouchAction::from_code(self.action)
    }
}

/// Convert a top-left origin y coordinate to a bottom-left origin one
pub fn flip_y(y: f32, surface_height: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let height = surface_height as f32;
    height - y
}

/// One accelerometer reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Seconds on the platform's monotonic sensor clock
    pub timestamp: f64,
    /// Acceleration along x in m/s²
    pub x: f32,
    /// Acceleration along y in m/s²
    pub y: f32,
    /// Acceleration along z in m/s²
    pub z: f32,
}

impl MotionSample {
    /// Build a sample from a nanosecond platform timestamp
    #[allow(clippy::cast_precision_loss)]
    pub fn from_nanos(timestamp_ns: u64, x: f32, y: f32, z: f32) -> Self {
        Self {
            timestamp: timestamp_ns as f64 / 1e9,
            x,
            y,
            z,
        }
    }
}
