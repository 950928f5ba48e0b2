//! Foundation module - Core utilities shared by every subsystem
//!
//! - Logging initialization and re-exports
//! - Frame clock and monotonic nanosecond time

pub mod logging;
pub mod time;
