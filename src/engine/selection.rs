use tracing::debug;

use crate::engine::models::{NutritionInfo, Recipe, RecipeConstraints, RecipeScore};
use crate::engine::scorer::score_recipes;
use crate::engine::tables::{
    BULK_COOKING_BONUS, COMPLEMENTARY_CARBS_MIN, COMPLEMENTARY_FAT_MIN, COMPLEMENTARY_PROTEIN_MIN,
    MAX_COMPLEMENTARY_RECIPES,
};

/// Recipes that scale up and keep in the fridge for at least `days`, scored
/// without inventory and given a flat bonus.
///
/// The bonus is added after the aggregate score is clamped, so results on
/// this path can exceed 100.
pub fn suggest_bulk_cooking_recipes(
    recipes: &[Recipe],
    constraints: &RecipeConstraints,
    days: u32,
) -> Vec<RecipeScore> {
    let suitable: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            recipe.bulk_cooking_multiplier > 1.0
                && recipe.fridge_days().is_some_and(|fridge_days| fridge_days >= days)
        })
        .cloned()
        .collect();
    debug!(candidates = recipes.len(), suitable = suitable.len(), days, "bulk cooking filter");

    let mut scores = score_recipes(&suitable, constraints, &[]);
    for score in &mut scores {
        score.score += BULK_COOKING_BONUS;
    }
    scores
}

/// Macro shortfall of `base` against `targets`. Missing values count as zero;
/// an absent target means no gap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroGaps {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroGaps {
    pub fn between(base: Option<&NutritionInfo>, targets: &NutritionInfo) -> Self {
        let gap = |target: Option<f64>, actual: Option<f64>| match target {
            Some(target) => target - actual.unwrap_or(0.0),
            None => 0.0,
        };
        Self {
            protein: gap(targets.protein, base.and_then(|n| n.protein)),
            carbs: gap(targets.carbs, base.and_then(|n| n.carbs)),
            fat: gap(targets.fat, base.and_then(|n| n.fat)),
        }
    }

    pub fn filled_by(&self, candidate: &NutritionInfo) -> bool {
        let protein = candidate.protein.unwrap_or(0.0);
        let carbs = candidate.carbs.unwrap_or(0.0);
        let fat = candidate.fat.unwrap_or(0.0);
        (self.protein > 0.0 && protein > COMPLEMENTARY_PROTEIN_MIN)
            || (self.carbs > 0.0 && carbs > COMPLEMENTARY_CARBS_MIN)
            || (self.fat > 0.0 && fat > COMPLEMENTARY_FAT_MIN)
    }
}

/// Up to five candidates, in input order, that cover a macro gap left by `base`.
/// Candidates are taken as given, so pass the base in `candidates` only if it
/// may pair with itself.
pub fn find_complementary_recipes(
    base: &Recipe,
    candidates: &[Recipe],
    nutrition_targets: &NutritionInfo,
) -> Vec<Recipe> {
    let gaps = MacroGaps::between(base.nutrition.as_ref(), nutrition_targets);
    debug!(recipe_id = %base.id, ?gaps, "macro gaps");

    candidates
        .iter()
        .filter(|candidate| {
            candidate
                .nutrition
                .as_ref()
                .is_some_and(|nutrition| gaps.filled_by(nutrition))
        })
        .take(MAX_COMPLEMENTARY_RECIPES)
        .cloned()
        .collect()
}

/// Keeps recipes tagged with every restriction (case-insensitive).
pub fn filter_by_dietary_restrictions(recipes: &[Recipe], restrictions: &[String]) -> Vec<Recipe> {
    let restrictions: Vec<String> = restrictions
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();

    recipes
        .iter()
        .filter(|recipe| {
            restrictions
                .iter()
                .all(|restriction| recipe.tags.iter().any(|tag| tag.to_lowercase() == *restriction))
        })
        .cloned()
        .collect()
}
