use serde_json::Value;

use crate::model::{Category, GatewayError};

/// Fetch boundary to the provider. Returns opaque records; discovering
/// what the fields mean is the normalizer's problem, not the gateway's.
#[async_trait::async_trait]
pub trait InventoryGateway: Send + Sync {
    async fn fetch_category(&self, category: Category) -> Result<Vec<Value>, GatewayError>;

    async fn fetch_cities(&self) -> Result<Vec<Value>, GatewayError>;
}
