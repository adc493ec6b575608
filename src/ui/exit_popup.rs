//! Exit-intent popup
//!
//! Opens once when the pointer leaves the page through the top edge. The
//! trigger belongs to this component instance, so remounting the page
//! gives a fresh one.

use leptos::prelude::*;

use crate::core::FormSection;
#[cfg(not(feature = "ssr"))]
use crate::core::exit_intent::ExitIntentTrigger;
#[cfg(not(feature = "ssr"))]
use crate::ui::browser::release_on_cleanup;
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;

#[component]
pub fn ExitIntentPopup() -> impl IntoView {
    let is_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        type MouseOutHandler = Closure<dyn FnMut(web_sys::MouseEvent)>;

        let trigger = StoredValue::new(ExitIntentTrigger::new());
        let listener = StoredValue::new_local(None::<MouseOutHandler>);

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let handler: MouseOutHandler = Closure::new(move |ev: web_sys::MouseEvent| {
                let leaves_document = ev.related_target().is_none();
                let fired = trigger
                    .try_update_value(|t| t.pointer_out(ev.client_y(), leaves_document))
                    .unwrap_or(false);
                if fired {
                    leptos::logging::log!("Exit intent detected");
                    is_open.try_set(true);
                }
            });

            let _ = document
                .add_event_listener_with_callback("mouseout", handler.as_ref().unchecked_ref());
            listener.set_value(Some(handler));
        });

        release_on_cleanup(listener, |handler: MouseOutHandler| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "mouseout",
                    handler.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let close = move |_| is_open.set(false);

    view! {
        <Show when=move || is_open.get()>
            <div class="exit-overlay" role="dialog" aria-modal="true" on:click=close>
                <div class="exit-popup" on:click=|ev| ev.stop_propagation()>
                    <button class="exit-close" aria-label="Close" on:click=close>
                        <Icon path=icons::X class="w-5 h-5" />
                    </button>
                    <h3 class="text-2xl font-bold mb-2">"Wait! Don't leave yet"</h3>
                    <p class="text-gray-600 mb-6">
                        "Get free early access to the DIFAL calculator and stop losing hours on manual tax math."
                    </p>
                    <LeadForm section=FormSection::ExitIntent cta_label="I want free access" />
                </div>
            </div>
        </Show>
    }
}

