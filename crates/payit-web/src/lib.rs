//! payit Web Frontend
//!
//! Leptos-based WASM frontend for the single-product checkout page.

mod api;
mod app;
mod checkout;
mod components;

pub use app::App;
pub use checkout::{
    CheckoutController, CheckoutGateway, CheckoutView, GatewayError, StatusKind, SubmitState,
};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
