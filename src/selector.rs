// Per-category suggestion filtering.
use crate::matcher::matches_destination;
use crate::model::CanonicalItem;

/// Keeps items whose price fits under the category's daily ceiling and
/// whose location matches the destination, in provider order (first fit
/// wins, no re-ranking), capped at `max_results`. An empty result is a
/// valid answer, not a failure.
pub fn select(
    items: &[CanonicalItem],
    ceiling: f64,
    destination: &str,
    max_results: usize,
) -> Vec<CanonicalItem> {
    let mut picked = Vec::new();
    for item in items {
        if picked.len() == max_results {
            break;
        }
        if item.price > ceiling {
            continue;
        }
        if !matches_destination(item.location.as_deref(), destination) {
            continue;
        }
        picked.push(item.clone());
    }
    picked
}
