//! UI Components

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::api::HttpCheckoutGateway;
use crate::checkout::{CheckoutController, CheckoutView, StatusKind};

/// [`CheckoutView`] backed by Leptos signals and the browser window.
struct SignalCheckoutView {
    status: RwSignal<Option<(String, StatusKind)>>,
    busy: RwSignal<bool>,
    quantity: NodeRef<html::Input>,
}

impl CheckoutView for SignalCheckoutView {
    fn set_status(&self, text: &str, kind: StatusKind) {
        self.status.set(Some((text.to_string(), kind)));
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn focus_quantity(&self) {
        if let Some(input) = self.quantity.get_untracked() {
            let _ = input.focus();
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

/// Quantity form wired to the checkout controller
#[component]
pub fn CheckoutForm() -> impl IntoView {
    let quantity_ref: NodeRef<html::Input> = NodeRef::new();
    let status = RwSignal::new(None::<(String, StatusKind)>);
    let busy = RwSignal::new(false);

    let controller = Rc::new(CheckoutController::new(
        HttpCheckoutGateway::new(),
        SignalCheckoutView {
            status,
            busy,
            quantity: quantity_ref,
        },
    ));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = quantity_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        let controller = Rc::clone(&controller);
        leptos::task::spawn_local(async move { controller.submit(&raw).await });
    };

    let status_text = move || status.get().map(|(text, _)| text).unwrap_or_default();
    let status_color = move || match status.get() {
        Some((_, StatusKind::Error)) => "#dc2626",
        _ => "#16a34a",
    };

    view! {
        <form class="checkout-form" on:submit=on_submit>
            <label>
                "Quantity"
                <input id="quantity" node_ref=quantity_ref type="number" min="1" value="1" />
            </label>
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                "Buy now"
            </button>
            <p class="message" style:color=status_color>
                {status_text}
            </p>
        </form>
    }
}
