// Budget math: turns a trip request into per-category daily ceilings.
use std::collections::BTreeMap;

use crate::model::{BudgetAllocation, Category, PlanError, TripRequest};

/// Tolerance when checking that a custom split sums to 1.0.
pub const SPLIT_TOLERANCE: f64 = 1e-3;

/// Pure computation, no I/O. Rejects inputs that would make the division
/// meaningless instead of silently correcting them. Rounding is left to
/// whoever renders the numbers.
pub fn allocate(
    req: &TripRequest,
    defaults: &BTreeMap<String, f64>,
) -> Result<BudgetAllocation, PlanError> {
    if req.total_budget <= 0.0 {
        return Err(PlanError::Validation("total_budget must be positive".into()));
    }
    if req.people_count == 0 {
        return Err(PlanError::Validation("people_count must be positive".into()));
    }
    if req.days == 0 {
        return Err(PlanError::Validation("days must be positive".into()));
    }

    let split = match &req.percentages {
        Some(custom) => validated_split(custom)?,
        None => defaults.clone(),
    };

    let per_person_total = req.total_budget / req.people_count as f64;
    let per_person_per_day = per_person_total / req.days as f64;
    let budgets_per_day = split
        .into_iter()
        .map(|(category, share)| (category, per_person_per_day * share))
        .collect();

    Ok(BudgetAllocation {
        per_person_total,
        per_person_per_day,
        budgets_per_day,
    })
}

/// A custom split must name exactly the four known categories and sum to
/// 1.0. Partial splits are ambiguous and are rejected, not renormalized.
fn validated_split(split: &BTreeMap<String, f64>) -> Result<BTreeMap<String, f64>, PlanError> {
    for (key, share) in split {
        if !Category::ALL.iter().any(|c| c.key() == key) {
            return Err(PlanError::Validation(format!(
                "unrecognized category '{key}' in percentages"
            )));
        }
        if !(0.0..=1.0).contains(share) {
            return Err(PlanError::Validation(format!(
                "percentage for '{key}' must be between 0 and 1, got {share}"
            )));
        }
    }
    for category in Category::ALL {
        if !split.contains_key(category.key()) {
            return Err(PlanError::Validation(format!(
                "percentages is missing category '{category}'"
            )));
        }
    }

    let sum: f64 = split.values().sum();
    if (sum - 1.0).abs() > SPLIT_TOLERANCE {
        return Err(PlanError::Validation(format!(
            "percentages must sum to 1.0, got {sum}"
        )));
    }

    Ok(split.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_percentages;

    fn request() -> TripRequest {
        TripRequest {
            total_budget: 30_000.0,
            people_count: 5,
            days: 7,
            destination: "Riyadh".to_string(),
            city_id: None,
            percentages: None,
        }
    }

    fn custom_split() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("hotels".to_string(), 0.4),
            ("food".to_string(), 0.25),
            ("activities".to_string(), 0.2),
            ("transport".to_string(), 0.15),
        ])
    }

    #[test]
    fn computes_documented_example() {
        let req = TripRequest {
            percentages: Some(custom_split()),
            ..request()
        };
        let allocation = allocate(&req, &default_percentages()).unwrap();

        assert_eq!(allocation.per_person_total, 6_000.0);
        assert!((allocation.per_person_per_day - 857.142857).abs() < 1e-4);
        assert!((allocation.budgets_per_day["hotels"] - 342.857142).abs() < 1e-4);
        assert!((allocation.budgets_per_day["food"] - 214.285714).abs() < 1e-4);
        assert!((allocation.budgets_per_day["activities"] - 171.428571).abs() < 1e-4);
        assert!((allocation.budgets_per_day["transport"] - 128.571428).abs() < 1e-4);
    }

    #[test]
    fn per_person_total_is_exact_division() {
        let allocation = allocate(&request(), &default_percentages()).unwrap();
        assert_eq!(allocation.per_person_total, 30_000.0 / 5.0);
    }

    #[test]
    fn daily_budgets_sum_back_to_daily_total() {
        let allocation = allocate(&request(), &default_percentages()).unwrap();
        let total: f64 = allocation.budgets_per_day.values().sum();
        assert!((total - allocation.per_person_per_day).abs() < 1e-9);
    }

    #[test]
    fn allocation_is_deterministic() {
        let defaults = default_percentages();
        let first = allocate(&request(), &defaults).unwrap();
        let second = allocate(&request(), &defaults).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let defaults = default_percentages();
        let zero_budget = TripRequest { total_budget: 0.0, ..request() };
        let zero_people = TripRequest { people_count: 0, ..request() };
        let zero_days = TripRequest { days: 0, ..request() };

        assert!(matches!(allocate(&zero_budget, &defaults), Err(PlanError::Validation(_))));
        assert!(matches!(allocate(&zero_people, &defaults), Err(PlanError::Validation(_))));
        assert!(matches!(allocate(&zero_days, &defaults), Err(PlanError::Validation(_))));
    }

    #[test]
    fn rejects_split_not_summing_to_one() {
        let mut split = custom_split();
        split.insert("hotels".to_string(), 0.3); // sums to 0.9
        let req = TripRequest { percentages: Some(split), ..request() };

        assert!(matches!(
            allocate(&req, &default_percentages()),
            Err(PlanError::Validation(_))
        ));
    }

    #[test]
    fn tolerates_tiny_rounding_drift_in_split() {
        let mut split = custom_split();
        split.insert("transport".to_string(), 0.1505);
        split.insert("hotels".to_string(), 0.3999);
        let req = TripRequest { percentages: Some(split), ..request() };

        assert!(allocate(&req, &default_percentages()).is_ok());
    }

    #[test]
    fn rejects_unknown_category() {
        let mut split = custom_split();
        split.insert("souvenirs".to_string(), 0.0);
        let req = TripRequest { percentages: Some(split), ..request() };

        assert!(matches!(
            allocate(&req, &default_percentages()),
            Err(PlanError::Validation(_))
        ));
    }

    #[test]
    fn rejects_partial_split() {
        let mut split = custom_split();
        split.remove("food");
        split.insert("hotels".to_string(), 0.65);
        let req = TripRequest { percentages: Some(split), ..request() };

        assert!(matches!(
            allocate(&req, &default_percentages()),
            Err(PlanError::Validation(_))
        ));
    }
}
