//! Browser-side collaborators for the lead-submission flow
//!
//! Leads are posted to the server's `/api/leads` endpoint, which forwards
//! them to the hosted store. Store credentials never reach the page.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::core::{
    AnalyticsError, AnalyticsEvent, AnalyticsSink, LeadServices, LeadStore, LeadSubmission,
    Scheduler, StoreError,
};
use crate::ui::notifications::NotificationManager;

/// Path of the lead endpoint served by the backend
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Lead store that posts `{ email, created_at }` to the backend
#[derive(Debug, Clone)]
pub struct HttpLeadStore {
    endpoint: String,
}

impl HttpLeadStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpLeadStore {
    fn default() -> Self {
        Self::new(LEADS_ENDPOINT)
    }
}

#[cfg(not(feature = "ssr"))]
async fn post_lead(endpoint: &str, submission: &LeadSubmission) -> Result<(), StoreError> {
    use gloo_net::http::Request;

    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(&submission.to_record())
        .map_err(|e| StoreError::Serialization(e.to_string()))?
        .send()
        .await
        .map_err(StoreError::network)?;

    if response.ok() {
        return Ok(());
    }

    let message = response.text().await.unwrap_or_default();
    Err(StoreError::rejected(response.status(), message))
}

#[cfg(feature = "ssr")]
async fn post_lead(_endpoint: &str, _submission: &LeadSubmission) -> Result<(), StoreError> {
    Err(StoreError::Unavailable)
}

impl LeadStore for HttpLeadStore {
    fn insert<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LocalBoxFuture<'a, Result<(), StoreError>> {
        Box::pin(post_lead(&self.endpoint, submission))
    }
}

/// Analytics sink that forwards events to a page-level `gtag` function
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagAnalytics;

impl AnalyticsSink for GtagAnalytics {
    #[cfg(not(feature = "ssr"))]
    fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(AnalyticsError::Unavailable)?;
        let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
            .map_err(|_| AnalyticsError::Unavailable)?;

        // No provider loaded on this page
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            return Ok(());
        };

        let attributes = serde_wasm_bindgen::to_value(&event.attributes)
            .map_err(|e| AnalyticsError::Provider(e.to_string()))?;

        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.name),
            &attributes,
        )
        .map_err(|e| AnalyticsError::Provider(format!("{:?}", e)))?;

        leptos::logging::log!("Analytics event recorded: {}", event.name);
        Ok(())
    }

    #[cfg(feature = "ssr")]
    fn record(&self, _event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// Scheduler backed by browser timeouts
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        #[cfg(not(feature = "ssr"))]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (delay, task);
        }
    }
}

/// Services wired for the live page
pub fn browser_lead_services(notifications: NotificationManager) -> LeadServices {
    LeadServices::new(
        Rc::new(HttpLeadStore::default()),
        Rc::new(notifications),
        Rc::new(GtagAnalytics),
        Rc::new(TimeoutScheduler),
    )
}

/// Hands the value left in `slot` to `release` when the owner is cleaned up
#[cfg_attr(feature = "ssr", allow(dead_code))]
pub(crate) fn release_on_cleanup<T: 'static>(
    slot: StoredValue<Option<T>, LocalStorage>,
    release: impl Fn(T) + Send + Sync + 'static,
) {
    on_cleanup(move || {
        if let Some(value) = slot.try_update_value(Option::take).flatten() {
            release(value);
        }
    });
}
