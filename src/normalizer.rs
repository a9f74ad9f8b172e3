use serde_json::Value;
use tracing::debug;

use crate::config::FieldCandidates;
use crate::model::CanonicalItem;
use crate::resolver::{resolve_location, resolve_price, resolve_text};

/// Converts raw provider records into canonical items, preserving order.
/// Records without a resolvable, non-negative price are dropped; losing a
/// slice of upstream data is expected and only worth a debug line.
pub fn normalize_all(records: &[Value], fields: &FieldCandidates) -> Vec<CanonicalItem> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        match normalize_record(record, fields) {
            Some(item) => items.push(item),
            None => debug!("dropping record without a usable price"),
        }
    }
    items
}

fn normalize_record(record: &Value, fields: &FieldCandidates) -> Option<CanonicalItem> {
    let record = record.as_object()?;
    let price = resolve_price(record, &fields.price)?;
    if price < 0.0 {
        return None;
    }

    Some(CanonicalItem {
        name: resolve_text(record, &fields.name),
        price,
        location: resolve_location(record, &fields.location),
        url: resolve_text(record, &fields.url),
    })
}
