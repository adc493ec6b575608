//! Lead submission data and the analytics payload that accompanies it

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::validation::EmailAddress;

/// Analytics category attached to every lead event
pub const LEAD_EVENT_CATEGORY: &str = "Lead Generation";

/// Label used when no email is available for an event
pub const UNKNOWN_EVENT_LABEL: &str = "Unknown";

/// A validated lead ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub email: EmailAddress,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn new(email: EmailAddress, submitted_at: DateTime<Utc>) -> Self {
        Self {
            email,
            submitted_at,
        }
    }

    /// Create a submission stamped with the current time
    pub fn now(email: EmailAddress) -> Self {
        Self::new(email, Utc::now())
    }

    /// Row payload for the remote store
    pub fn to_record(&self) -> LeadRecord {
        LeadRecord {
            email: self.email.as_str().to_string(),
            created_at: self
                .submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Wire format of a lead row: `{ email, created_at }`
///
/// `created_at` is ISO-8601 in UTC with millisecond precision,
/// e.g. `2025-03-01T12:30:00.000Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub email: String,
    pub created_at: String,
}

impl LeadRecord {
    /// Parse the timestamp back into a `DateTime`
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Page section that hosts a lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FormSection {
    #[display("hero")]
    Hero,
    #[display("pricing")]
    Pricing,
    #[display("final_cta")]
    FinalCta,
    #[display("exit_intent")]
    ExitIntent,
}

impl FormSection {
    /// Analytics event name recorded when a form in this section submits
    pub fn event_name(&self) -> String {
        format!("{}_signup", self)
    }

    /// DOM id of the form element
    pub fn form_id(&self) -> &'static str {
        match self {
            FormSection::Hero => "leadForm",
            FormSection::Pricing => "pricingForm",
            FormSection::FinalCta => "finalForm",
            FormSection::ExitIntent => "exitForm",
        }
    }
}

/// Attributes sent with every lead analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttributes {
    pub event_category: String,
    pub event_label: String,
    pub value: u32,
}

/// A named analytics event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: EventAttributes,
}

impl AnalyticsEvent {
    /// Event recorded when a form in `section` submits `email`
    pub fn lead_signup(section: FormSection, email: Option<&str>) -> Self {
        let label = email
            .filter(|e| !e.is_empty())
            .unwrap_or(UNKNOWN_EVENT_LABEL);

        Self {
            name: section.event_name(),
            attributes: EventAttributes {
                event_category: LEAD_EVENT_CATEGORY.to_string(),
                event_label: label.to_string(),
                value: 1,
            },
        }
    }
}
