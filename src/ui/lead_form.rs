//! Lead capture form
//!
//! Each [`LeadForm`] owns one [`LeadSubmissionController`]. The controller
//! drives the form through [`SignalFormView`], which maps control updates
//! onto reactive signals.

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    ControlDisplay, ControlTone, ControlView, FormSection, LeadSubmissionController,
};
use crate::ui::browser::browser_lead_services;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Reactive state of one rendered form
#[derive(Clone)]
pub struct SignalFormView {
    pub email: RwSignal<String>,
    pub label: RwSignal<String>,
    pub tone: RwSignal<ControlTone>,
    pub disabled: RwSignal<bool>,
    mounted: Arc<AtomicBool>,
}

impl SignalFormView {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            email: RwSignal::new(String::new()),
            label: RwSignal::new(label.into()),
            tone: RwSignal::new(ControlTone::Neutral),
            disabled: RwSignal::new(false),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the form as removed from the page
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Relaxed);
    }
}

impl ControlView for SignalFormView {
    fn email_value(&self) -> String {
        self.email.try_get_untracked().unwrap_or_default()
    }

    fn control_label(&self) -> String {
        self.label.try_get_untracked().unwrap_or_default()
    }

    fn render_control(&self, display: &ControlDisplay) {
        self.label.try_set(display.label.clone());
        self.tone.try_set(display.tone);
        self.disabled.try_set(display.disabled);
    }

    fn clear_inputs(&self) {
        self.email.try_set(String::new());
    }

    fn alert(&self, message: &str) {
        #[cfg(not(feature = "ssr"))]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }

        #[cfg(feature = "ssr")]
        leptos::logging::warn!("{}", message);
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }
}

fn tone_class(tone: ControlTone) -> &'static str {
    match tone {
        ControlTone::Neutral => "lead-submit",
        ControlTone::Busy => "lead-submit tone-busy",
        ControlTone::Success => "lead-submit tone-success",
        ControlTone::Error => "lead-submit tone-error",
    }
}

fn tone_icon(tone: ControlTone) -> Option<&'static str> {
    match tone {
        ControlTone::Neutral => None,
        ControlTone::Busy => Some(icons::LOADER),
        ControlTone::Success => Some(icons::CHECK),
        ControlTone::Error => Some(icons::X),
    }
}

/// Email input plus submit control bound to a page section
#[component]
pub fn LeadForm(
    section: FormSection,
    /// Idle label of the submit control
    #[prop(into)]
    cta_label: String,
    #[prop(default = "Enter your best email")] placeholder: &'static str,
) -> impl IntoView {
    let notifications = use_notifications();

    let form = SignalFormView::new(cta_label);
    let SignalFormView {
        email,
        label,
        tone,
        disabled,
        ..
    } = form.clone();

    let unmounted = form.clone();
    on_cleanup(move || unmounted.unmount());

    let controller =
        LeadSubmissionController::new(section, Rc::new(form), browser_lead_services(notifications));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    view! {
        <form id=section.form_id() class="lead-form" novalidate=true on:submit=on_submit>
            <input
                type="email"
                class="lead-input"
                placeholder=placeholder
                aria-label="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || tone_class(tone.get())
                disabled=move || disabled.get()
            >
                {move || {
                    tone_icon(tone.get())
                        .map(|path| view! { <Icon path=path class="w-4 h-4 inline mr-2" /> })
                }}
                {move || label.get()}
            </button>
        </form>
    }
}
