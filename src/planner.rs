// Orchestrates one plan-trip flow: allocate, fan out fetches, normalize,
// select. Everything here is stateless per request; the only shared data
// is the read-only configuration.
use chrono::Utc;
use futures::future::join_all;
use serde_json::Value;
use tracing::{info, warn};

use crate::allocator::allocate;
use crate::config::AppConfig;
use crate::gateway::InventoryGateway;
use crate::model::{
    Category, ExternalPreview, PlanError, TripPlanResponse, TripRequest,
};
use crate::normalizer::normalize_all;
use crate::selector::select;

pub struct TripPlanner<G> {
    gateway: G,
    config: AppConfig,
}

impl<G: InventoryGateway> TripPlanner<G> {
    pub fn new(gateway: G, config: AppConfig) -> Self {
        Self { gateway, config }
    }

    /// Computes the budget allocation, then matches it against provider
    /// inventory. Validation failures abort before any fetch is issued;
    /// upstream failures degrade the affected category to an empty list.
    pub async fn plan_trip(&self, req: &TripRequest) -> Result<TripPlanResponse, PlanError> {
        if req.destination.trim().is_empty() {
            return Err(PlanError::Validation("destination must not be empty".into()));
        }
        let allocation = allocate(req, &self.config.default_percentages)?;

        let destination = match req.city_id {
            Some(city_id) => self.city_name(city_id).await?,
            None => req.destination.clone(),
        };
        info!(
            "Planning {} day(s) in {} for {} people, {:.2} per person per day",
            req.days, destination, req.people_count, allocation.per_person_per_day
        );

        let raw = self.fetch_all().await;

        let mut suggestions = Vec::with_capacity(Category::ALL.len());
        for (category, records) in Category::ALL.into_iter().zip(raw) {
            let raw_count = records.len();
            let items = normalize_all(&records, &self.config.fields);
            let ceiling = allocation
                .budgets_per_day
                .get(category.key())
                .copied()
                .unwrap_or(0.0);
            let picked = select(&items, ceiling, &destination, self.config.max_suggestions);
            info!(
                "{}: {} raw, {} usable, {} within {:.2}/day",
                category,
                raw_count,
                items.len(),
                picked.len(),
                ceiling
            );
            suggestions.push(picked);
        }

        let mut suggestions = suggestions.into_iter();
        Ok(TripPlanResponse {
            per_person_total: allocation.per_person_total,
            per_person_per_day: allocation.per_person_per_day,
            budgets_per_day: allocation.budgets_per_day,
            hotels: suggestions.next().unwrap_or_default(),
            food: suggestions.next().unwrap_or_default(),
            activities: suggestions.next().unwrap_or_default(),
            transport: suggestions.next().unwrap_or_default(),
        })
    }

    /// Passes through a bounded sample of each endpoint's raw records,
    /// unmodified, so field-name drift can be diagnosed by eye.
    pub async fn preview_external(&self) -> ExternalPreview {
        let mut raw = self.fetch_all().await;
        for records in &mut raw {
            records.truncate(self.config.preview_limit);
        }

        let mut raw = raw.into_iter();
        ExternalPreview {
            fetched_at: Utc::now(),
            hotels: raw.next().unwrap_or_default(),
            restaurants: raw.next().unwrap_or_default(),
            activities: raw.next().unwrap_or_default(),
            transport: raw.next().unwrap_or_default(),
        }
    }

    /// Fires all category fetches at once and awaits them all. One failed
    /// category must not block the others, so failures turn into empty
    /// record lists, in `Category::ALL` order.
    async fn fetch_all(&self) -> Vec<Vec<Value>> {
        let fetches = Category::ALL.map(|category| self.gateway.fetch_category(category));
        join_all(fetches)
            .await
            .into_iter()
            .zip(Category::ALL)
            .map(|(result, category)| match result {
                Ok(records) => records,
                Err(e) => {
                    warn!("{} fetch failed, continuing without it: {e}", category);
                    Vec::new()
                }
            })
            .collect()
    }

    /// Looks the city up by id and returns its name as the effective
    /// destination. An explicit id that cannot be resolved rejects the
    /// request, mirroring how malformed budgets do.
    async fn city_name(&self, city_id: i64) -> Result<String, PlanError> {
        let cities = self.gateway.fetch_cities().await.map_err(|e| {
            warn!("cities fetch failed while resolving city_id={city_id}: {e}");
            PlanError::UnknownCity(city_id)
        })?;

        for city in &cities {
            if city.get("id").and_then(Value::as_i64) != Some(city_id) {
                continue;
            }
            if let Some(name) = city.get("name").and_then(Value::as_str) {
                let name = name.trim();
                if !name.is_empty() {
                    return Ok(name.to_string());
                }
            }
        }
        Err(PlanError::UnknownCity(city_id))
    }
}
