//! Cooperative stop flag shared between a running loop and its handle.

use std::cell::Cell;
use std::rc::Rc;

/// Cheap clonable flag; every clone observes the same state.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let signal = StopSignal::new();
        let loop_side = signal.clone();
        assert!(!loop_side.is_stopped());

        signal.stop();
        assert!(loop_side.is_stopped());
    }
}
