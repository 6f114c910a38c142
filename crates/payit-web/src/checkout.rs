//! Checkout Form Controller
//!
//! The submit flow behind the checkout form, kept free of any DOM types so it
//! can be exercised with plain test doubles. The controller owns an explicit
//! [`SubmitState`] and ignores any submit that arrives while a request is in
//! flight, so "no double checkout" is an invariant of the controller rather
//! than a side effect of the disabled button.

use std::cell::Cell;

use async_trait::async_trait;
use thiserror::Error;

/// Where the controller is in the submit flow.
///
/// `Redirecting` is terminal: the browser is navigating away and this page
/// will not accept another submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Redirecting,
}

/// Visual register of a status message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Errors from the checkout API call
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request never completed
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response; the body is kept for diagnostics only
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body was not valid JSON
    #[error("invalid response payload: {0}")]
    Decode(String),

    /// 2xx response without a usable redirect URL
    #[error("checkout response missing redirect URL")]
    MissingUrl,
}

/// Issues the checkout request and decodes the redirect URL.
#[async_trait(?Send)]
pub trait CheckoutGateway {
    async fn create_session(&self, quantity: i64) -> Result<String, GatewayError>;
}

/// Everything the controller does to the page, behind a seam so tests can
/// record the calls instead of touching a live document.
pub trait CheckoutView {
    fn set_status(&self, text: &str, kind: StatusKind);
    fn set_busy(&self, busy: bool);
    fn focus_quantity(&self);
    fn navigate(&self, url: &str);
}

const MSG_INVALID_QUANTITY: &str = "Enter a quantity of at least 1.";
const MSG_CONTACTING: &str = "Contacting Stripe…";
const MSG_REDIRECTING: &str = "Redirecting to Stripe…";
const MSG_FAILED: &str = "Unable to start checkout. Please try again.";

/// Drives the checkout form: validates the quantity, issues exactly one
/// request per accepted submission, and redirects on success.
pub struct CheckoutController<G, V> {
    gateway: G,
    view: V,
    state: Cell<SubmitState>,
}

impl<G: CheckoutGateway, V: CheckoutView> CheckoutController<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self {
            gateway,
            view,
            state: Cell::new(SubmitState::Idle),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Handle one submit of the form.
    ///
    /// Invalid input is rejected before any network traffic; a failed request
    /// returns the controller to `Idle` so the user may retry.
    pub async fn submit(&self, raw_quantity: &str) {
        if self.state.get() != SubmitState::Idle {
            return;
        }

        let Some(quantity) = parse_quantity(raw_quantity) else {
            self.view.set_status(MSG_INVALID_QUANTITY, StatusKind::Error);
            self.view.focus_quantity();
            return;
        };

        self.state.set(SubmitState::Submitting);
        self.view.set_busy(true);
        self.view.set_status(MSG_CONTACTING, StatusKind::Info);

        match self.gateway.create_session(quantity).await {
            Ok(url) => {
                self.state.set(SubmitState::Redirecting);
                self.view.set_status(MSG_REDIRECTING, StatusKind::Info);
                self.view.navigate(&url);
            }
            Err(err) => {
                leptos::logging::error!("Checkout failed: {err}");
                self.state.set(SubmitState::Idle);
                self.view.set_status(MSG_FAILED, StatusKind::Error);
                self.view.set_busy(false);
            }
        }
    }
}

/// Strict base-10 parse; anything that is not an integer of at least 1 is
/// rejected.
fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|quantity| *quantity >= 1)
}
