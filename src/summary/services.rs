use crate::entries::services::{round2, EntryFactors};
use crate::store::Document;

use super::dto::{DailySummary, MealTotals};

/// Group a day's entries into meal buckets. Rounding happens once, after summing.
pub fn summarize(day: String, docs: &[Document]) -> DailySummary {
    let mut by_meal = MealTotals::default();
    let mut total = 0.0;
    for doc in docs {
        let factors = EntryFactors::from_body(&doc.body);
        let calories = factors.calories();
        *by_meal.bucket_mut(factors.meal) += calories;
        total += calories;
    }
    DailySummary {
        date: day,
        by_meal: by_meal.map(round2),
        total: round2(total),
    }
}
