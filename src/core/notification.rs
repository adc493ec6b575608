//! Notification values shown as transient banners

use serde::{Deserialize, Serialize};

/// Time a banner stays on screen before dismissing itself
pub const NOTIFICATION_DISMISS_MS: u32 = 5000;

/// Duration of the exit transition before a banner is removed
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Maximum number of banners stacked at once
pub const MAX_NOTIFICATIONS: usize = 5;

/// Notification type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A banner to present to the visitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub headline: String,
    pub detail: String,
    pub auto_dismiss_ms: u32,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        headline: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            headline: headline.into(),
            detail: detail.into(),
            auto_dismiss_ms: NOTIFICATION_DISMISS_MS,
        }
    }

    pub fn success(headline: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, headline, detail)
    }

    pub fn error(headline: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, headline, detail)
    }
}

/// Banner text for a captured lead
pub fn lead_captured(email: &str) -> (&'static str, String) {
    (
        "Email registered successfully!",
        format!("You will receive access at: {}", email),
    )
}

/// Banner text for a failed insert
pub fn lead_failed() -> (&'static str, &'static str) {
    (
        "Registration failed",
        "An error occurred while registering your email. Please try again.",
    )
}
