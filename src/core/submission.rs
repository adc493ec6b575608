//! Lead submission state machine
//!
//! One [`LeadSubmissionController`] is bound to one form instance:
//!
//! ```text
//! Idle -> Submitting -> Succeeded | Failed -> (reset delay) -> Idle
//! ```
//!
//! Validation failures never leave `Idle`. While the controller is not idle
//! further submits are ignored, so a form never has two inserts in flight.
//! Distinct forms get distinct controllers and run independently.

use std::cell::RefCell;
use std::rc::Rc;

use super::error::StoreError;
use super::lead::{AnalyticsEvent, FormSection, LeadSubmission};
use super::notification::{NotificationKind, lead_captured, lead_failed};
use super::services::{ControlDisplay, ControlView, LeadServices};
use super::validation::{INVALID_EMAIL_MESSAGE, validate_email};

/// Per-form submission state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the store failure that caused it
    Failed(StoreError),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Submitting => "Submitting",
            SubmissionState::Succeeded => "Succeeded",
            SubmissionState::Failed(_) => "Failed",
        }
    }
}

/// Drives the submit-and-feedback flow of a single lead form
#[derive(Clone)]
pub struct LeadSubmissionController {
    inner: Rc<ControllerInner>,
}

struct ControllerInner {
    section: FormSection,
    view: Rc<dyn ControlView>,
    services: LeadServices,
    state: RefCell<SubmissionState>,
    /// Control label captured when leaving `Idle`
    original_label: RefCell<Option<String>>,
}

impl LeadSubmissionController {
    pub fn new(section: FormSection, view: Rc<dyn ControlView>, services: LeadServices) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                section,
                view,
                services,
                state: RefCell::new(SubmissionState::Idle),
                original_label: RefCell::new(None),
            }),
        }
    }

    pub fn section(&self) -> FormSection {
        self.inner.section
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.state.borrow().clone()
    }

    /// Handle a submit of the bound form.
    ///
    /// Returns once the remote insert has completed and feedback is shown;
    /// the return to `Idle` happens later through the scheduler. Store
    /// errors are reported to the visitor and never returned.
    pub async fn submit(&self) {
        let inner = &self.inner;

        if !inner.state.borrow().is_idle() {
            leptos::logging::log!(
                "Ignoring {} form submit while {}",
                inner.section,
                inner.state.borrow().display_name()
            );
            return;
        }

        let email = match validate_email(&inner.view.email_value()) {
            Ok(email) => email,
            Err(_) => {
                inner.view.alert(INVALID_EMAIL_MESSAGE);
                return;
            }
        };

        inner.begin();

        let event = AnalyticsEvent::lead_signup(inner.section, Some(email.as_str()));
        let _ = inner.services.analytics.record(&event);

        let submission = LeadSubmission::now(email);
        let result = inner.services.store.insert(&submission).await;
        inner.finish(&submission, result);

        let scheduled = Rc::clone(inner);
        inner
            .services
            .scheduler
            .schedule(inner.services.reset_delay, Box::new(move || scheduled.reset()));
    }
}

impl ControllerInner {
    fn begin(&self) {
        *self.original_label.borrow_mut() = Some(self.view.control_label());
        *self.state.borrow_mut() = SubmissionState::Submitting;
        self.view.render_control(&ControlDisplay::sending());
    }

    fn finish(&self, submission: &LeadSubmission, result: Result<(), StoreError>) {
        let mounted = self.view.is_mounted();

        match result {
            Ok(()) => {
                *self.state.borrow_mut() = SubmissionState::Succeeded;
                if mounted {
                    self.view.render_control(&ControlDisplay::succeeded());
                    self.view.clear_inputs();
                }

                let (headline, detail) = lead_captured(submission.email.as_str());
                self.services
                    .presenter
                    .show(NotificationKind::Success, headline, &detail);
            }
            Err(err) => {
                self.services.failure_log.store_failed(self.section, &err);

                *self.state.borrow_mut() = SubmissionState::Failed(err);
                if mounted {
                    self.view.render_control(&ControlDisplay::failed());
                }

                let (headline, detail) = lead_failed();
                self.services
                    .presenter
                    .show(NotificationKind::Error, headline, detail);
            }
        }
    }

    fn reset(&self) {
        // Form was removed from the page while feedback was showing
        if !self.view.is_mounted() {
            return;
        }

        let label = self.original_label.borrow_mut().take().unwrap_or_default();
        self.view.render_control(&ControlDisplay::idle(label));
        *self.state.borrow_mut() = SubmissionState::Idle;
    }
}
