//! Rendering surface bookkeeping
//!
//! [`SurfaceState`] is owned by the coordinator and only ever touched under
//! its lock. It carries no synchronization of its own.

/// Drawable surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl SurfaceSize {
    /// Create a size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are usable for rendering
    pub const fn is_valid(self) -> bool {
        self.width >= 0 && self.height >= 0
    }
}

/// What the coordinator knows about the rendering surface
///
/// Starts with the context flag raised: the engine has uploaded nothing yet,
/// so the first show always asks for a full upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    size: Option<SurfaceSize>,
    context_recreated: bool,
    activation_pending: bool,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            size: None,
            context_recreated: true,
            activation_pending: false,
        }
    }
}

impl SurfaceState {
    /// No surface yet, fresh context owed to the engine
    pub fn new() -> Self {
        Self::default()
    }

    /// True once geometry has been reported; never reverts
    pub const fn has_surface(&self) -> bool {
        self.size.is_some()
    }

    /// Last reported geometry
    pub const fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    /// Whether the graphics context was rebuilt since the last show
    pub const fn context_recreated(&self) -> bool {
        self.context_recreated
    }

    /// Whether a resume arrived before any surface existed
    pub const fn activation_pending(&self) -> bool {
        self.activation_pending
    }

    /// Record a graphics context (re)creation
    pub fn mark_context_recreated(&mut self) {
        self.context_recreated = true;
    }

    /// Read and clear the context flag, for a visible notification
    pub fn take_context_recreated(&mut self) -> bool {
        std::mem::take(&mut self.context_recreated)
    }

    /// Defer activation until a surface exists
    ///
    /// Returns `false` (and changes nothing) when a surface already exists;
    /// the caller must activate immediately instead.
    pub fn defer_activation(&mut self) -> bool {
        if self.has_surface() {
            return false;
        }
        self.activation_pending = true;
        true
    }

    /// Read and clear the pending activation flag
    pub fn take_activation_pending(&mut self) -> bool {
        std::mem::take(&mut self.activation_pending)
    }

    /// Drop any pending activation without acting on it
    pub fn cancel_pending_activation(&mut self) {
        self.activation_pending = false;
    }

    /// Store new geometry
    ///
    /// Returns `true` when this is the first report or either dimension
    /// differs from the stored one. Identical reports leave state untouched.
    pub fn apply_geometry(&mut self, size: SurfaceSize) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        true
    }
}
