//! Hazard notification side channel.
//!
//! Only liquid and gas containers can raise hazard signals. They carry a
//! [`HazardChannel`] that forwards notifications to a [`HazardSink`]; the
//! default sink writes a `warn!` event. Query the capability with
//! [`Container::hazard_channel`](crate::container::Container::hazard_channel).

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::serial::SerialNumber;

/// One hazard signal raised by a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardNotice {
    pub serial: SerialNumber,
    pub message: String,
}

/// Receiver of hazard notices.
pub trait HazardSink: Send + Sync {
    fn notify(&self, notice: &HazardNotice);
}

/// Default sink: emits each notice as a tracing warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHazardSink;

impl HazardSink for TracingHazardSink {
    fn notify(&self, notice: &HazardNotice) {
        tracing::warn!(
            target: "cargofleet::hazard",
            serial = %notice.serial,
            "HAZARD: {}",
            notice.message
        );
    }
}

/// Sink that keeps every notice in memory, for inspection by callers.
#[derive(Debug, Default)]
pub struct RecordingHazardSink {
    notices: Mutex<Vec<HazardNotice>>,
}

impl RecordingHazardSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<HazardNotice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl HazardSink for RecordingHazardSink {
    fn notify(&self, notice: &HazardNotice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice.clone());
        }
    }
}

/// Cloneable handle to a shared [`HazardSink`].
#[derive(Clone)]
pub struct HazardChannel {
    sink: Arc<dyn HazardSink>,
}

impl HazardChannel {
    pub fn new(sink: Arc<dyn HazardSink>) -> Self {
        Self { sink }
    }

    /// Send a notice for `serial`.
    pub fn notify(&self, serial: &SerialNumber, message: impl Into<String>) {
        let notice = HazardNotice {
            serial: serial.clone(),
            message: message.into(),
        };
        self.sink.notify(&notice);
    }
}

impl Default for HazardChannel {
    fn default() -> Self {
        Self::new(Arc::new(TracingHazardSink))
    }
}

impl fmt::Debug for HazardChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HazardChannel").finish_non_exhaustive()
    }
}
