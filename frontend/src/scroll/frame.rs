/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a frame callback.
    /// While one is already pending the event is dropped.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from inside the frame callback before doing the work.
    pub fn fire(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_events_until_frame_fires() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.fire();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
