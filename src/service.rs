//! Service lifecycle
//!
//! Readiness state handed to the serving layer alongside its [`Store`].
//! One instance per running service; nothing here is process-global.
//!
//! ```text
//! Starting ──mark_listening──► Ready ──begin_shutdown──► ShuttingDown
//!     └─────────────────begin_shutdown─────────────────────────┘
//! ```
//!
//! [`Store`]: crate::store::Store

use std::sync::atomic::{AtomicU8, Ordering};

/// Where a service is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceState {
    Starting = 0,
    Ready = 1,
    ShuttingDown = 2,
}

impl ServiceState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ServiceState::Starting,
            1 => ServiceState::Ready,
            _ => ServiceState::ShuttingDown,
        }
    }
}

/// Owned readiness flag for one service instance
#[derive(Debug)]
pub struct Lifecycle {
    state: AtomicU8,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(ServiceState::Starting as u8),
        }
    }

    /// The listener is bound; start reporting ready.
    ///
    /// Returns `false` if shutdown already began.
    pub fn mark_listening(&self) -> bool {
        let swapped = self
            .state
            .compare_exchange(
                ServiceState::Starting as u8,
                ServiceState::Ready as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if swapped {
            tracing::info!("Service ready");
        }
        swapped || self.state() == ServiceState::Ready
    }

    /// Stop reporting ready. Terminal.
    pub fn begin_shutdown(&self) {
        let previous = self
            .state
            .swap(ServiceState::ShuttingDown as u8, Ordering::AcqRel);

        if previous != ServiceState::ShuttingDown as u8 {
            tracing::info!("Service shutting down");
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ServiceState::Ready
    }

    pub fn state(&self) -> ServiceState {
        ServiceState::from_u8(self.state.load(Ordering::Acquire))
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
