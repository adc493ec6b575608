//! Offer countdown display

use std::time::Duration;

use leptos::prelude::*;

use crate::core::countdown::{Countdown, DEFAULT_OFFER_WINDOW};
use crate::ui::icon::{Icon, icons};

/// Live countdown for the limited-time offer
#[component]
pub fn OfferCountdown(#[prop(default = DEFAULT_OFFER_WINDOW)] window: Duration) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::new(window));

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::countdown::COUNTDOWN_TICK;
        use gloo_timers::callback::Interval;

        let tick_ms = u32::try_from(COUNTDOWN_TICK.as_millis()).unwrap_or(1000);
        let interval = Interval::new(tick_ms, move || {
            if countdown.try_update(|c| c.tick(COUNTDOWN_TICK)) == Some(true) {
                leptos::logging::log!("Offer countdown finished");
            }
        });
        // Dropped with the effect, which cancels the interval
        StoredValue::new_local(interval);
    });

    view! {
        <div class="offer-countdown" role="timer">
            <Icon path=icons::CLOCK class="w-5 h-5" />
            <Show
                when=move || !countdown.with(Countdown::is_finished)
                fallback=|| view! { <span>"Offer ended"</span> }
            >
                <span>"Offer ends in "</span>
                <strong class="font-mono">{move || countdown.with(|c| c.parts().to_string())}</strong>
            </Show>
        </div>
    }
}
