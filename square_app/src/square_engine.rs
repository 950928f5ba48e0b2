//! A tiny engine: a square that can be dragged with a finger and tilted
//! around with the accelerometer
//!
//! Positions are normalized device coordinates, origin in the center, y up.
//! Pointer input arrives in surface pixels with y down and is converted here.

use std::sync::{Arc, Mutex, PoisonError};

use host_bridge::foundation::time::FrameClock;
use host_bridge::gateway::{EngineGateway, EngineInit, GatewayError, HostRequests};
use host_bridge::input::{flip_y, TouchAction};
use nalgebra::Vector2;

/// Edge length of the square in normalized units
pub const SIZE: f32 = 0.3;

/// How strongly tilt accelerates the square
const TILT_GAIN: f32 = 0.05;

/// Observable engine state
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    /// Bottom-left corner
    pub origin: Vector2<f32>,
    /// Drift per second from tilt
    pub velocity: Vector2<f32>,
    /// A finger is holding the square
    pub dragging: bool,
    /// Engine is running
    pub active: bool,
    /// Surface is shown
    pub visible: bool,
    /// Surface size in pixels
    pub surface: (i32, i32),
    /// Number of GPU resource uploads (one per context)
    pub uploads: u32,
    /// Frames drawn
    pub frames: u64,
    /// Motion samples received
    pub samples: u64,
}

impl Default for Square {
    fn default() -> Self {
        Self {
            origin: Vector2::new(-0.5, 0.5),
            velocity: Vector2::zeros(),
            dragging: false,
            active: false,
            visible: false,
            surface: (0, 0),
            uploads: 0,
            frames: 0,
            samples: 0,
        }
    }
}

impl Square {
    /// Whether a normalized point lies strictly inside the square
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x > self.origin.x
            && point.x < self.origin.x + SIZE
            && point.y > self.origin.y
            && point.y < self.origin.y + SIZE
    }

    /// Center the square on a normalized point
    pub fn center_on(&mut self, point: Vector2<f32>) {
        self.origin = point - Vector2::repeat(SIZE / 2.0);
    }

    /// Convert surface pixels (y down) to normalized coordinates (y up)
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn to_normalized(&self, x: f32, y: f32) -> Option<Vector2<f32>> {
        let (width, height) = self.surface;
        if width <= 0 || height <= 0 {
            return None;
        }
        let y_up = flip_y(y, height as u32);
        Some(Vector2::new(
            2.0 * x / width as f32 - 1.0,
            2.0 * y_up / height as f32 - 1.0,
        ))
    }

    fn advance(&mut self, dt: f32) {
        if self.dragging {
            return;
        }
        self.origin += self.velocity * dt;
        self.origin.x = self.origin.x.clamp(-1.0, 1.0 - SIZE);
        self.origin.y = self.origin.y.clamp(-1.0, 1.0 - SIZE);
    }
}

/// Shared handle to the square, readable while the engine runs
pub type SharedSquare = Arc<Mutex<Square>>;

/// Gateway implementation for the square engine
pub struct SquareEngine {
    square: SharedSquare,
    clock: FrameClock,
    requests: Option<HostRequests>,
    want_accelerometer: bool,
}

impl SquareEngine {
    /// Create the engine and a handle for observing it
    pub fn new(want_accelerometer: bool) -> (Self, SharedSquare) {
        let square = SharedSquare::default();
        let engine = Self {
            square: Arc::clone(&square),
            clock: FrameClock::default(),
            requests: None,
            want_accelerometer,
        };
        (engine, square)
    }

    fn with_square<R>(&self, f: impl FnOnce(&mut Square) -> R) -> R {
        let mut square = self.square.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut square)
    }
}

impl EngineGateway for SquareEngine {
    fn initialize(&mut self, init: &EngineInit) -> Result<(), GatewayError> {
        log::info!(
            "Square engine starting (cache: {}, storage: {})",
            init.cache_dir.display(),
            init.storage_dir.display()
        );
        std::fs::create_dir_all(&init.storage_dir).map_err(|e| {
            GatewayError::EngineUnavailable(format!(
                "storage directory {} unusable: {e}",
                init.storage_dir.display()
            ))
        })?;
        if self.want_accelerometer {
            init.requests.subscribe_sensor(true);
        }
        self.requests = Some(init.requests.clone());
        Ok(())
    }

    fn activate(&mut self) {
        self.clock.reset();
        self.with_square(|square| square.active = true);
    }

    fn deactivate(&mut self) {
        self.with_square(|square| {
            square.active = false;
            square.dragging = false;
        });
    }

    fn set_visible(&mut self, context_recreated: bool, width: i32, height: i32) {
        self.with_square(|square| {
            if context_recreated {
                square.uploads += 1;
                log::debug!("Uploading square geometry to new context");
            }
            square.visible = true;
            square.surface = (width, height);
        });
    }

    fn set_hidden(&mut self) {
        self.with_square(|square| square.visible = false);
    }

    fn render(&mut self) {
        let dt = self.clock.tick();
        self.with_square(|square| {
            if square.active {
                square.advance(dt);
            }
            square.frames += 1;
        });
    }

    fn dispatch_touch(&mut self, action: i32, x: f32, y: f32) {
        self.with_square(|square| {
            let Some(point) = square.to_normalized(x, y) else {
                return;
            };
            match (square.dragging, TouchAction::from_code(action)) {
                (true, TouchAction::Move) => square.center_on(point),
                (true, TouchAction::Up) => square.dragging = false,
                (false, TouchAction::Down) if square.contains(point) => {
                    square.dragging = true;
                    square.center_on(point);
                }
                _ => {}
            }
        });
    }

    fn dispatch_motion_sample(&mut self, _timestamp: f64, x: f32, y: f32, _z: f32) {
        self.with_square(|square| {
            square.velocity = Vector2::new(-x, y) * TILT_GAIN;
            square.samples += 1;
        });
    }

    fn suspend_event_delivery(&mut self) {
        self.with_square(|square| square.velocity = Vector2::zeros());
    }

    fn resume_event_delivery(&mut self) {
        log::debug!("Tilt input resumed");
    }
}
