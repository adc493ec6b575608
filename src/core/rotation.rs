//! Rotating status text for the calculation demo

use std::time::Duration;

/// Interval between message changes
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(1200);

/// Messages cycled by the calculation demo
pub const CALCULATION_MESSAGES: [&str; 4] = [
    "Calculating DIFAL...",
    "Checking legislation...",
    "Applying state rules...",
    "Finishing calculation...",
];

/// Cycles through a fixed list of messages
#[derive(Debug, Clone)]
pub struct TextRotator {
    messages: &'static [&'static str],
    index: usize,
}

impl TextRotator {
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self { messages, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.messages.get(self.index).copied().unwrap_or_default()
    }

    /// Move to the next message, wrapping at the end
    pub fn advance(&mut self) -> &'static str {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
        self.current()
    }
}

impl Default for TextRotator {
    fn default() -> Self {
        Self::new(&CALCULATION_MESSAGES)
    }
}
