// Core structs: TripRequest, BudgetAllocation, CanonicalItem, responses, errors
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The four inventory classes the provider serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hotels,
    Food,
    Activities,
    Transport,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hotels,
        Category::Food,
        Category::Activities,
        Category::Transport,
    ];

    /// Key used in percentage splits and response bodies.
    pub fn key(self) -> &'static str {
        match self {
            Category::Hotels => "hotels",
            Category::Food => "food",
            Category::Activities => "activities",
            Category::Transport => "transport",
        }
    }

    /// Path segment on the provider API. Food lives under `restaurants`,
    /// transport under the provider's (misspelled) `plains`.
    pub fn endpoint(self) -> &'static str {
        match self {
            Category::Hotels => "hotels",
            Category::Food => "restaurants",
            Category::Activities => "activities",
            Category::Transport => "plains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub total_budget: f64,
    pub people_count: u32,
    pub days: u32,
    pub destination: String,
    /// Optional provider city id; when set, its city name overrides `destination`.
    #[serde(default)]
    pub city_id: Option<i64>,
    /// Custom split per category. Must cover exactly the four known
    /// categories and sum to 1.0; the default split applies when omitted.
    #[serde(default)]
    pub percentages: Option<BTreeMap<String, f64>>,
}

/// Derived budgets. Computed once per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAllocation {
    pub per_person_total: f64,
    pub per_person_per_day: f64,
    pub budgets_per_day: BTreeMap<String, f64>,
}

/// One provider record after field discovery. Only the price is mandatory;
/// records without a resolvable price never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalItem {
    pub name: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripPlanResponse {
    pub per_person_total: f64,
    pub per_person_per_day: f64,
    pub budgets_per_day: BTreeMap<String, f64>,
    pub hotels: Vec<CanonicalItem>,
    pub food: Vec<CanonicalItem>,
    pub activities: Vec<CanonicalItem>,
    pub transport: Vec<CanonicalItem>,
}

/// Bounded raw samples per endpoint, for eyeballing field-name drift.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalPreview {
    pub fetched_at: DateTime<Utc>,
    pub hotels: Vec<Value>,
    pub restaurants: Vec<Value>,
    pub activities: Vec<Value>,
    pub transport: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {status} for {endpoint}")]
    BadStatus { endpoint: String, status: u16 },
    #[error("unexpected payload shape from {0}")]
    UnexpectedShape(String),
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid trip request: {0}")]
    Validation(String),
    #[error("no city found for id {0}")]
    UnknownCity(i64),
}
