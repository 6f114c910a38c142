//! API Client

use async_trait::async_trait;
use serde::Deserialize;

use crate::checkout::{CheckoutGateway, GatewayError};

/// Product display data from `GET /api/product`
#[derive(Clone, Debug, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
    pub price_display: String,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    #[serde(default)]
    url: Option<String>,
}

fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".into())
}

/// Fetch product display data for the checkout page
pub async fn fetch_product() -> Result<ProductInfo, String> {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product", api_base()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(format!("product request failed: {}", response.status()))
    }
}

/// Real gateway: POSTs to `/api/checkout` and decodes the redirect URL.
#[derive(Default)]
pub struct HttpCheckoutGateway {
    client: reqwest::Client,
}

impl HttpCheckoutGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_session(&self, quantity: i64) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(format!("{}/api/checkout", api_base()))
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let data: CheckoutSessionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        data.url
            .filter(|url| !url.is_empty())
            .ok_or(GatewayError::MissingUrl)
    }
}
