//! Rotating status text used by the calculation demo

use leptos::prelude::*;

use crate::core::rotation::TextRotator;

#[component]
pub fn RotatingText() -> impl IntoView {
    let rotator = RwSignal::new(TextRotator::default());

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::rotation::ROTATION_INTERVAL;
        use gloo_timers::callback::Interval;

        let interval_ms = u32::try_from(ROTATION_INTERVAL.as_millis()).unwrap_or(1200);
        let interval = Interval::new(interval_ms, move || {
            rotator.try_update(|r| {
                r.advance();
            });
        });
        StoredValue::new_local(interval);
    });

    view! {
        <span class="rotating-text" aria-live="polite">
            {move || rotator.with(TextRotator::current)}
        </span>
    }
}
