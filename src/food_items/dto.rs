use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reusable food with a known calorie rate per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(alias = "caloriesPerUnit")]
    pub calories_per_unit: f64,
}

/// A stored food item as returned to clients. Stored fields are echoed as-is,
/// so documents written by other tools list without failing the read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItemRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct FoodItemQuery {
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub(crate) fn default_unit() -> String {
    "serving".into()
}

fn default_limit() -> i64 {
    50
}
