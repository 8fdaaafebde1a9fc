use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::food_items::dto::default_unit;

/// Meal buckets an entry can be logged under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snack => "snack",
        }
    }

    /// Unknown tags fall back to lunch.
    pub fn from_tag_lenient(tag: &str) -> Meal {
        Meal::ALL
            .into_iter()
            .find(|m| m.as_str() == tag)
            .unwrap_or_default()
    }
}

/// A logged consumption event, as submitted and as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    #[serde(default)]
    pub meal: Meal,
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(alias = "caloriesPerUnit")]
    pub calories_per_unit: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A stored entry with its derived calories. Stored fields are echoed as-is.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub calories: f64,
}

#[derive(Debug, Serialize)]
pub struct EntriesPage {
    pub items: Vec<EntryView>,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    pub day: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_quantity() -> f64 {
    1.0
}

fn default_limit() -> i64 {
    200
}
