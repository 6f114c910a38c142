//! Main App Component

use leptos::prelude::*;

use crate::api::{self, ProductInfo};
use crate::components::CheckoutForm;

/// Root application component: the single checkout page.
#[component]
pub fn App() -> impl IntoView {
    let product = RwSignal::new(None::<ProductInfo>);

    leptos::task::spawn_local(async move {
        match api::fetch_product().await {
            Ok(info) => product.set(Some(info)),
            Err(err) => leptos::logging::error!("Failed to load product: {err}"),
        }
    });

    view! {
        <main class="app">
            <header class="hero">
                <h1>"payit"</h1>
                <p class="tagline">"One product, one click, Stripe Checkout."</p>
            </header>

            <section class="product">
                {move || {
                    product
                        .get()
                        .map(|info| {
                            view! {
                                <div class="product-info">
                                    <h2>{info.name.clone()}</h2>
                                    <p class="description">{info.description.clone()}</p>
                                    <p class="price">
                                        {info.price_display.clone()}
                                        <span class="currency">{info.currency.clone()}</span>
                                    </p>
                                </div>
                            }
                        })
                }}
                <CheckoutForm />
            </section>
        </main>
    }
}
