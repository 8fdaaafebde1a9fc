use serde_json::{Map, Value};

use crate::common::{parse_day, require_positive, require_text};
use crate::error::ValidationError;
use crate::store::Document;

use super::dto::{EntriesPage, Entry, EntryView, Meal};

/// Check constraints and return the entry with its date in canonical form.
pub fn validate_entry(mut entry: Entry) -> Result<Entry, ValidationError> {
    entry.date = parse_day("date", &entry.date)?;
    require_text("name", &entry.name)?;
    require_positive("quantity", entry.quantity)?;
    require_positive("calories_per_unit", entry.calories_per_unit)?;
    if !(entry.quantity * entry.calories_per_unit).is_finite() {
        return Err(ValidationError::new(
            "calories_per_unit",
            "quantity times calories_per_unit is out of range",
        ));
    }
    Ok(entry)
}

/// Round to two decimals, half away from zero (`0.125` gives `0.13`).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Calorie factors read from a stored entry document.
///
/// Missing quantity reads as 1, missing rate as 0, and a missing or
/// unrecognised meal as lunch, so a malformed record never fails a read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryFactors {
    pub meal: Meal,
    pub quantity: f64,
    pub calories_per_unit: f64,
}

impl EntryFactors {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let meal = body
            .get("meal")
            .and_then(Value::as_str)
            .map(Meal::from_tag_lenient)
            .unwrap_or_default();
        let quantity = body.get("quantity").and_then(Value::as_f64).unwrap_or(1.0);
        let calories_per_unit = body
            .get("calories_per_unit")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        Self {
            meal,
            quantity,
            calories_per_unit,
        }
    }

    /// Product of the factors; an out-of-range product reads as 0.
    pub fn calories(&self) -> f64 {
        let calories = self.quantity * self.calories_per_unit;
        if calories.is_finite() {
            calories
        } else {
            0.0
        }
    }
}

/// Attach rounded calories to each document. `total` covers only the given documents.
///
/// Stored `id` and `calories` keys are dropped; the view supplies its own.
pub fn build_page(docs: Vec<Document>) -> EntriesPage {
    let mut total = 0.0;
    let mut items = Vec::with_capacity(docs.len());
    for doc in docs {
        let calories = round2(EntryFactors::from_body(&doc.body).calories());
        total += calories;
        let mut fields = doc.body;
        fields.remove("id");
        fields.remove("calories");
        items.push(EntryView {
            id: doc.id,
            fields,
            calories,
        });
    }
    EntriesPage {
        items,
        total: round2(total),
    }
}
