use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::traits::InventoryGateway;
use crate::config::AppConfig;
use crate::model::{Category, GatewayError};

pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_matches('/'))
    }

    async fn fetch_list(&self, endpoint: &str) -> Result<Vec<Value>, GatewayError> {
        let url = self.build_url(endpoint);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await?;
        unwrap_collection(payload)
            .ok_or_else(|| GatewayError::UnexpectedShape(endpoint.to_string()))
    }
}

/// The provider wraps lists inconsistently: sometimes a bare array,
/// sometimes `{"data": [...]}` or `{"items": [...]}`.
fn unwrap_collection(payload: Value) -> Option<Vec<Value>> {
    match payload {
        Value::Array(records) => Some(records),
        Value::Object(mut envelope) => {
            for key in ["data", "items"] {
                if let Some(Value::Array(records)) = envelope.remove(key) {
                    return Some(records);
                }
            }
            None
        }
        _ => None,
    }
}

#[async_trait::async_trait]
impl InventoryGateway for HttpGateway {
    async fn fetch_category(&self, category: Category) -> Result<Vec<Value>, GatewayError> {
        self.fetch_list(category.endpoint()).await
    }

    async fn fetch_cities(&self) -> Result<Vec<Value>, GatewayError> {
        self.fetch_list("cities").await
    }
}
