use crate::common::{require_positive, require_text};
use crate::error::ValidationError;
use crate::store::DocumentFilter;

use super::dto::FoodItem;

pub fn validate_food_item(item: &FoodItem) -> Result<(), ValidationError> {
    require_text("name", &item.name)?;
    require_positive("calories_per_unit", item.calories_per_unit)?;
    Ok(())
}

/// Empty or absent query matches everything.
pub fn name_filter(q: Option<&str>) -> DocumentFilter {
    match q {
        Some(q) if !q.is_empty() => DocumentFilter::NameContains(q.to_string()),
        _ => DocumentFilter::All,
    }
}
