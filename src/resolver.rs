// Field discovery over untyped provider records.
//
// The provider never published a schema, so every semantic role (price,
// location, name, url) is looked up through an ordered candidate list:
// the first key present with a usable value wins. Candidate lists are
// configuration, not code (see FieldCandidates in config.rs).
use serde_json::{Map, Value};

/// Sub-keys probed when a price hides inside a `price_range` object.
const PRICE_RANGE_KEYS: [&str; 7] = ["min", "from", "start", "low", "price", "amount", "minimum"];

/// Sub-keys probed when a location candidate holds an object, e.g.
/// `{"city": {"name": "Riyadh"}}`.
const LOCATION_SUB_KEYS: [&str; 4] = ["name", "city", "region", "address"];

/// Resolves a price from the first candidate key holding a number or a
/// numeric-looking string. Falls back to a nested `price_range` object and
/// then to nested restaurant `foods` entries (cheapest one wins). An empty
/// candidate list leaves the role unresolved for every record.
pub fn resolve_price(record: &Map<String, Value>, candidates: &[String]) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }

    for key in candidates {
        if let Some(price) = record.get(key).and_then(coerce_price) {
            return Some(price);
        }
    }

    if let Some(Value::Object(range)) = record.get("price_range") {
        for key in PRICE_RANGE_KEYS {
            if let Some(price) = range.get(key).and_then(coerce_price) {
                return Some(price);
            }
        }
    }

    cheapest_food_price(record, candidates)
}

/// Resolves a free-text role (name, url): first candidate whose value is a
/// non-empty string. Numbers are accepted and stringified.
pub fn resolve_text(record: &Map<String, Value>, candidates: &[String]) -> Option<String> {
    for key in candidates {
        match record.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Like `resolve_text`, but location candidates may hold an object whose
/// sub-keys carry the actual place name. A bare `city` object is probed
/// last, mirroring records shaped like `{"city": {"name": ...}}`.
pub fn resolve_location(record: &Map<String, Value>, candidates: &[String]) -> Option<String> {
    if candidates.is_empty() {
        return None;
    }

    for key in candidates {
        match record.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Object(obj)) => {
                if let Some(place) = place_from_object(obj) {
                    return Some(place);
                }
            }
            _ => {}
        }
    }

    if let Some(Value::Object(city)) = record.get("city") {
        return place_from_object(city);
    }
    None
}

fn place_from_object(obj: &Map<String, Value>) -> Option<String> {
    LOCATION_SUB_KEYS.iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// Restaurants often carry no top-level price at all, only a menu under
/// `foods` (either a bare list or a `{"data": [...]}` page). The cheapest
/// resolvable entry stands in for the record's price.
fn cheapest_food_price(record: &Map<String, Value>, candidates: &[String]) -> Option<f64> {
    let entries = match record.get("foods") {
        Some(Value::Array(list)) => list.as_slice(),
        Some(Value::Object(obj)) => match obj.get("data") {
            Some(Value::Array(list)) => list.as_slice(),
            _ => return None,
        },
        _ => return None,
    };

    let mut cheapest: Option<f64> = None;
    for entry in entries {
        if let Some(entry) = entry.as_object() {
            if let Some(price) = resolve_price(entry, candidates) {
                cheapest = Some(cheapest.map_or(price, |best| best.min(price)));
            }
        }
    }
    cheapest
}

fn coerce_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_price_text(s),
        _ => None,
    }
}

/// Accepts "150", "1,500.00" and prefixed forms like "150 SAR".
fn parse_price_text(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    if let Ok(price) = cleaned.parse::<f64>() {
        return Some(price);
    }

    let prefix: String = cleaned
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if prefix.is_empty() {
        return None;
    }
    prefix.parse().ok()
}
