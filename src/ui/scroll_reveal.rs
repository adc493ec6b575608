//! Scroll reveal
//!
//! Adds the `visible` class to every `.landing-scroll-animate` element once
//! its top edge rises [`REVEAL_OFFSET_PX`](crate::core::reveal::REVEAL_OFFSET_PX)
//! above the bottom of the viewport. Checked once on mount and again on
//! every scroll.

use leptos::prelude::*;

/// Elements hidden until scrolled into view
pub const REVEAL_SELECTOR: &str = ".landing-scroll-animate";

/// Class that plays the entry transition
pub const REVEALED_CLASS: &str = "visible";

#[cfg(not(feature = "ssr"))]
fn reveal_visible() {
    use crate::core::reveal::should_reveal;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let Ok(elements) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    for i in 0..elements.length() {
        let Some(element) = elements
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        }
    }
}

/// Renders nothing; drives the reveal classes of the page
#[component]
pub fn ScrollReveal() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::browser::release_on_cleanup;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        type ScrollHandler = Closure<dyn FnMut()>;

        let listener = StoredValue::new_local(None::<ScrollHandler>);

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            reveal_visible();

            let handler: ScrollHandler = Closure::new(reveal_visible);
            let _ = window
                .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            listener.set_value(Some(handler));
        });

        release_on_cleanup(listener, |handler: ScrollHandler| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            }
        });
    }
}
