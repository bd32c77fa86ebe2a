//! Cooperative shutdown signalling.
//!
//! All pair workers share one flag; a single interrupt stops every pair at
//! once. Workers observe the flag at iteration boundaries and between sleep
//! ticks, so shutdown latency is bounded by roughly one second plus any
//! in-flight network call. Nothing is hard-killed.

use std::sync::atomic::{ AtomicBool, Ordering };
use std::sync::Arc;

use crate::error::{ BotError, BotResult };
use crate::logger::{ self, LogTag };

#[derive(Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self {
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Idempotent: the first call flips the flag, later calls are no-ops.
    pub fn request(&self) {
        if !self.requested.swap(true, Ordering::AcqRel) {
            logger::info(LogTag::System, "Shutdown requested, waiting for workers to finish");
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

/// Install the Ctrl-C handler that flips the shared flag.
pub fn install_shutdown_handler(flag: ShutdownFlag) -> BotResult<()> {
    ctrlc
        ::set_handler(move || {
            flag.request();
        })
        .map_err(|e| BotError::Config(format!("failed to install signal handler: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_idempotent() {
        let flag = ShutdownFlag::new();
        assert!(!flag.is_requested());

        flag.request();
        assert!(flag.is_requested());

        // A second request stays set and does not panic
        flag.request();
        assert!(flag.is_requested());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let flag = ShutdownFlag::new();
        let observer = flag.clone();
        flag.request();
        assert!(observer.is_requested());
    }
}
