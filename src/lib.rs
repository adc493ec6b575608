//! DIFAL Calc - lead capture landing page
//!
//! Server-rendered Leptos site that collects early-access emails through
//! several independent forms and stores them in a hosted table.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
