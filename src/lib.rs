//! nightsteel - portfolio and agency partnership site
//!
//! Server-rendered with Leptos and hydrated in the browser. Animation, lead
//! capture and content logic lives in [`core`]; components live in [`ui`].

#![recursion_limit = "4096"]

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
