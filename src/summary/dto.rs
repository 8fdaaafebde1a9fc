use serde::{Deserialize, Serialize};

use crate::entries::dto::Meal;

/// Calories per meal bucket. All four buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealTotals {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl MealTotals {
    pub fn bucket_mut(&mut self, meal: Meal) -> &mut f64 {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
            Meal::Snack => &mut self.snack,
        }
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            breakfast: f(self.breakfast),
            lunch: f(self.lunch),
            dinner: f(self.dinner),
            snack: f(self.snack),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub by_meal: MealTotals,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub day: Option<String>,
}
