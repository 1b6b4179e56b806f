//! Cooperative cancellation, checked once per loop iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::state::StopReason;

/// A source of quit requests.
pub trait QuitSignal {
    /// `Some(reason)` if the loop should stop at this iteration boundary.
    fn should_quit(&mut self) -> Option<StopReason>;
}

impl<F> QuitSignal for F
where
    F: FnMut() -> Option<StopReason>,
{
    fn should_quit(&mut self) -> Option<StopReason> {
        self()
    }
}

/// Flag set by the Ctrl+C handler.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    flag: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// A flag with no handler attached; call [`trigger`](Self::trigger)
    /// to raise it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process-wide Ctrl+C handler that raises this flag.
    ///
    /// This should be called once at program startup.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let flag = Self::new();
        let handler_flag = Arc::clone(&flag.flag);
        ctrlc::set_handler(move || {
            handler_flag.store(true, Ordering::SeqCst);
        })?;
        Ok(flag)
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl QuitSignal for InterruptFlag {
    fn should_quit(&mut self) -> Option<StopReason> {
        if self.is_set() {
            log::info!("Interrupt received, stopping");
            Some(StopReason::Interrupted)
        } else {
            None
        }
    }
}

/// Several quit sources polled in order; the first hit wins.
#[derive(Default)]
pub struct QuitSignals {
    signals: Vec<Box<dyn QuitSignal>>,
}

impl QuitSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<Q: QuitSignal + 'static>(mut self, signal: Q) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl QuitSignal for QuitSignals {
    fn should_quit(&mut self) -> Option<StopReason> {
        self.signals.iter_mut().find_map(|s| s.should_quit())
    }
}
