//! Requests from the engine back to the host
//!
//! Engine hooks run inside gateway calls, i.e. while the coordinator lock is
//! held, so they cannot call coordinator entry points directly. Instead they
//! queue a [`HostRequest`]; the coordinator applies queued requests right after
//! the gateway call returns, still under its lock. Requests queued from an
//! engine-owned thread are applied at the next entry point.

use std::sync::{Arc, Mutex, PoisonError};

/// Something the engine wants the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostRequest {
    /// Start (`true`) or stop (`false`) accelerometer delivery
    SubscribeSensor(bool),
}

/// Cloneable queue of engine requests
#[derive(Debug, Clone, Default)]
pub struct HostRequests {
    queue: Arc<Mutex<Vec<HostRequest>>>,
}

impl HostRequests {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request
    pub fn push(&self, request: HostRequest) {
        log::debug!("Engine queued host request {request:?}");
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }

    /// Ask for accelerometer samples to start or stop
    pub fn subscribe_sensor(&self, subscribe: bool) {
        self.push(HostRequest::SubscribeSensor(subscribe));
    }

    /// Number of requests waiting to be applied
    pub fn pending(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Take every queued request in submission order
    pub(crate) fn drain(&self) -> Vec<HostRequest> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
