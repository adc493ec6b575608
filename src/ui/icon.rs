use leptos::prelude::*;

/// Inline stroke icon
#[component]
pub fn Icon(
    /// SVG path data, usually one of [`icons`]
    path: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

/// Path data for the icons used on the page
pub mod icons {
    pub const CHECK: &str = "M5 13l4 4L19 7";
    pub const CHECK_CIRCLE: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
    pub const ALERT_TRIANGLE: &str = "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z";
    pub const LOADER: &str = "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15";
    pub const X: &str = "M6 18L18 6M6 6l12 12";
    pub const CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";
    pub const CALCULATOR: &str = "M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z";
    pub const SHIELD: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";
    pub const LIGHTNING: &str = "M13 10V3L4 14h7v7l9-11h-7z";
    pub const DOCUMENT: &str = "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z";
}
