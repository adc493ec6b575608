//! Exit-intent detection
//!
//! A one-shot trigger owned by the component that shows the exit popup.
//! Each instance fires at most once until it is explicitly re-armed.

/// Pointer positions at or above this `clientY` count as leaving the page
pub const EXIT_EDGE_Y: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitIntentTrigger {
    fired: bool,
    edge_y: i32,
}

impl ExitIntentTrigger {
    pub fn new() -> Self {
        Self {
            fired: false,
            edge_y: EXIT_EDGE_Y,
        }
    }

    /// Feed a `mouseout` event.
    ///
    /// `leaves_document` is true when the pointer moved to no element at all
    /// (the event has no related target). Returns true when the popup
    /// should open.
    pub fn pointer_out(&mut self, client_y: i32, leaves_document: bool) -> bool {
        if self.fired || !leaves_document || client_y > self.edge_y {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn rearm(&mut self) {
        self.fired = false;
    }
}

impl Default for ExitIntentTrigger {
    fn default() -> Self {
        Self::new()
    }
}
