use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a network operation is outstanding.
///
/// Controllers take `&mut self` for every mutating call, so two operations
/// can never overlap on one controller. The flag exists so a presentation
/// layer sharing the controller behind a lock can show a busy state and
/// disable its triggers.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Mark an operation as started. The flag clears when the guard drops,
    /// including on early return.
    pub fn begin(&self) -> InFlightGuard {
        self.flag.store(true, Ordering::Release);
        InFlightGuard {
            flag: Arc::clone(&self.flag),
        }
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
