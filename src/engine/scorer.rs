use rayon::prelude::*;
use tracing::{debug, info};

use crate::engine::criteria::{
    difficulty_match, ingredient_match, is_available, nutrition_match, preference_match, time_match,
};
use crate::engine::models::{InventoryItem, Recipe, RecipeConstraints, RecipeScore, ScoreBreakdown};
use crate::engine::tables::{
    ingredient_price, DIFFICULTY_WEIGHT, INGREDIENT_WEIGHT, NUTRITION_WEIGHT, PREFERENCE_WEIGHT,
    TIME_WEIGHT,
};

/// Union of the free-text ingredient list and the inventory item names,
/// trimmed, lower-cased and deduplicated in first-seen order.
pub fn availability_set(constraints: &RecipeConstraints, inventory: &[InventoryItem]) -> Vec<String> {
    let mut available: Vec<String> = Vec::new();
    let names = constraints
        .available_ingredients
        .iter()
        .map(String::as_str)
        .chain(inventory.iter().map(|item| item.item_name.as_str()));

    for name in names {
        let name = name.trim().to_lowercase();
        if !name.is_empty() && !available.contains(&name) {
            available.push(name);
        }
    }
    available
}

/// Required ingredients the availability set does not cover, in recipe order.
pub fn missing_ingredients(recipe: &Recipe, available: &[String]) -> Vec<String> {
    recipe
        .required_ingredients()
        .filter(|ingredient| !is_available(&ingredient.name, available))
        .map(|ingredient| ingredient.name.clone())
        .collect()
}

/// Heuristic shopping cost of `missing`, rounded to pence.
pub fn estimate_cost(missing: &[String]) -> f64 {
    let total: f64 = missing.iter().map(|name| ingredient_price(name)).sum();
    (total * 100.0).round() / 100.0
}

/// Fixed-weight sum of the five criteria, rounded and kept within 0-100.
pub fn weighted_total(breakdown: &ScoreBreakdown) -> f64 {
    let total = breakdown.ingredient_match * INGREDIENT_WEIGHT
        + breakdown.time_match * TIME_WEIGHT
        + breakdown.difficulty_match * DIFFICULTY_WEIGHT
        + breakdown.nutrition_match * NUTRITION_WEIGHT
        + breakdown.preference_match * PREFERENCE_WEIGHT;
    total.round().clamp(0.0, 100.0)
}

/// Scores one recipe against an already-built availability set.
pub fn score_recipe(recipe: &Recipe, constraints: &RecipeConstraints, available: &[String]) -> RecipeScore {
    let breakdown = ScoreBreakdown {
        ingredient_match: ingredient_match(recipe, available),
        time_match: time_match(recipe, constraints.max_cooking_time),
        difficulty_match: difficulty_match(recipe, constraints.max_difficulty),
        nutrition_match: nutrition_match(recipe, constraints.nutrition_targets.as_ref()),
        preference_match: preference_match(recipe, &constraints.preferred_tags),
    };
    let missing = missing_ingredients(recipe, available);
    let estimated_cost = estimate_cost(&missing);
    let score = weighted_total(&breakdown);

    debug!(recipe_id = %recipe.id, score, missing = missing.len(), "scored recipe");

    RecipeScore {
        recipe: recipe.clone(),
        score,
        breakdown,
        missing_ingredients: missing,
        estimated_cost,
    }
}

/// Stable descending sort: equal scores keep their input order.
pub fn sort_by_score_desc(scores: &mut [RecipeScore]) {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Ranks every recipe by overall fitness. Returns one score per input recipe.
pub fn score_recipes(
    recipes: &[Recipe],
    constraints: &RecipeConstraints,
    inventory: &[InventoryItem],
) -> Vec<RecipeScore> {
    let available = availability_set(constraints, inventory);

    // `collect` on an indexed parallel iterator keeps input order, so the
    // stable sort below still sees recipes in the caller's order.
    let mut scores: Vec<RecipeScore> = recipes
        .par_iter()
        .map(|recipe| score_recipe(recipe, constraints, &available))
        .collect();
    sort_by_score_desc(&mut scores);

    info!(
        recipes = scores.len(),
        available = available.len(),
        top = ?scores.first().map(|s| s.score),
        "ranked recipes"
    );
    scores
}
