//! Typed host events
//!
//! Every coordinator entry point has a matching [`HostEvent`] variant, so an
//! event source can hand events over a channel instead of holding a
//! coordinator reference. [`forward_until_closed`] drains such a channel.

use std::sync::mpsc::Receiver;

use crate::input::{MotionSample, PointerEvent};
use crate::lifecycle::Coordinator;

/// Event delivered by the host application, surface or input subsystem
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Application resumed
    Resume,
    /// Application paused
    Pause,
    /// Application window started
    Start,
    /// Application window stopped
    Stop,
    /// Application restarting after a stop
    Restart,
    /// Graphics context created or recreated
    SurfaceCreated,
    /// Surface size reported
    SurfaceResized {
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
    },
    /// The rendering subsystem wants a frame
    Frame,
    /// Pointer input
    Pointer(PointerEvent),
    /// Accelerometer sample
    Motion(MotionSample),
}

impl From<PointerEvent> for HostEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<MotionSample> for HostEvent {
    fn from(sample: MotionSample) -> Self {
        Self::Motion(sample)
    }
}

/// Dispatch events from `receiver` until every sender is dropped
///
/// Returns the number of events dispatched.
pub fn forward_until_closed(receiver: &Receiver<HostEvent>, coordinator: &Coordinator) -> usize {
    let mut forwarded = 0;
    for event in receiver {
        coordinator.dispatch(event);
        forwarded += 1;
    }
    log::debug!("Event channel closed after {forwarded} events");
    forwarded
}
