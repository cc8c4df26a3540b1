//! Per-frame coalescing of scroll and resize work.
//!
//! The host owns the frame clock. Event handlers only mark work as pending;
//! the pending work runs when the host calls the controller's `run_frame`.

/// Busy flag: the first request in a frame schedules work, later requests
/// before that work runs are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    scheduled: bool,
}

impl FrameGate {
    /// Returns `true` when this call scheduled the work.
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Clears the flag, returning whether work was scheduled.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.scheduled)
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_drops_requests_until_taken() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.take());
        assert!(!gate.take());
        assert!(gate.request());
    }
}
