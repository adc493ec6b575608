//! Collaborators of the lead-submission flow
//!
//! The controller only talks to these traits, so it can run against a
//! rendered Leptos form in the browser or against recording fakes in tests.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::error::{AnalyticsError, StoreError};
use super::lead::{AnalyticsEvent, FormSection, LeadSubmission};
use super::notification::NotificationKind;

/// Delay before a submit control returns to idle after feedback
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Insert-only persistence for leads. No deduplication is expected.
pub trait LeadStore {
    fn insert<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LocalBoxFuture<'a, Result<(), StoreError>>;
}

/// Transient user-facing banners. Implementations dismiss banners on their
/// own and must not block the caller.
pub trait NotificationPresenter {
    fn show(&self, kind: NotificationKind, headline: &str, detail: &str);
}

/// Fire-and-forget event recording. A missing provider is not an error
/// worth surfacing; callers ignore the result.
pub trait AnalyticsSink {
    fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Destination for failed-insert reports
pub trait FailureLog {
    fn store_failed(&self, section: FormSection, err: &StoreError);
}

/// Logs failed inserts to the console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFailureLog;

impl FailureLog for ConsoleFailureLog {
    fn store_failed(&self, section: FormSection, err: &StoreError) {
        leptos::logging::error!("Failed to save lead from {} form: {}", section, err);
    }
}

/// Runs a callback once after `delay`. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Visual tone of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlTone {
    #[default]
    Neutral,
    Busy,
    Success,
    Error,
}

/// What the submit control should look like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDisplay {
    pub label: String,
    pub tone: ControlTone,
    pub disabled: bool,
}

impl ControlDisplay {
    /// Enabled control with its own label and no feedback styling
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: ControlTone::Neutral,
            disabled: false,
        }
    }

    pub fn sending() -> Self {
        Self {
            label: "Sending...".to_string(),
            tone: ControlTone::Busy,
            disabled: true,
        }
    }

    pub fn succeeded() -> Self {
        Self {
            label: "Email registered!".to_string(),
            tone: ControlTone::Success,
            disabled: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            label: "Registration failed".to_string(),
            tone: ControlTone::Error,
            disabled: true,
        }
    }
}

/// One form instance on the page: an email input plus a submit control
pub trait ControlView {
    /// Current value of the email input
    fn email_value(&self) -> String;

    /// Label currently shown on the submit control
    fn control_label(&self) -> String;

    fn render_control(&self, display: &ControlDisplay);

    /// Reset every input of the form to empty
    fn clear_inputs(&self);

    /// Blocking alert used for validation failures
    fn alert(&self, message: &str);

    /// False once the form has been removed from the page
    fn is_mounted(&self) -> bool;
}

/// Page-wide collaborators shared by every form controller
#[derive(Clone)]
pub struct LeadServices {
    pub store: Rc<dyn LeadStore>,
    pub presenter: Rc<dyn NotificationPresenter>,
    pub analytics: Rc<dyn AnalyticsSink>,
    pub scheduler: Rc<dyn Scheduler>,
    pub failure_log: Rc<dyn FailureLog>,
    pub reset_delay: Duration,
}

impl LeadServices {
    pub fn new(
        store: Rc<dyn LeadStore>,
        presenter: Rc<dyn NotificationPresenter>,
        analytics: Rc<dyn AnalyticsSink>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            store,
            presenter,
            analytics,
            scheduler,
            failure_log: Rc::new(ConsoleFailureLog),
            reset_delay: RESET_DELAY,
        }
    }

    pub fn with_failure_log(mut self, log: Rc<dyn FailureLog>) -> Self {
        self.failure_log = log;
        self
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

/// Sink used when no analytics provider is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record(&self, _event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_displays() {
        let idle = ControlDisplay::idle("Get access");
        assert_eq!(idle.label, "Get access");
        assert_eq!(idle.tone, ControlTone::Neutral);
        assert!(!idle.disabled);

        assert!(ControlDisplay::sending().disabled);
        assert_eq!(ControlDisplay::sending().tone, ControlTone::Busy);
        assert_eq!(ControlDisplay::succeeded().tone, ControlTone::Success);
        assert_eq!(ControlDisplay::failed().tone, ControlTone::Error);
    }

    #[test]
    fn test_noop_analytics_never_fails() {
        let event = AnalyticsEvent::lead_signup(FormSection::Hero, None);
        assert!(NoopAnalytics.record(&event).is_ok());
    }
}
