use std::collections::HashMap;
use tracing::debug;

use crate::engine::models::{InventoryItem, Recipe, RecipeScore, ScoreBreakdown};
use crate::engine::scorer::{estimate_cost, sort_by_score_desc};
use crate::engine::tables::FEASIBILITY_PENALTY_PER_MISSING;

/// Lower-cased item name to total quantity on hand. Repeated rows add up.
pub fn inventory_quantities(inventory: &[InventoryItem]) -> HashMap<String, f64> {
    let mut quantities: HashMap<String, f64> = HashMap::new();
    for item in inventory {
        let name = item.item_name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        *quantities.entry(name).or_insert(0.0) += item.quantity;
    }
    quantities
}

/// Recipes cookable right now with at most `max_missing` short ingredients.
///
/// Unlike [`score_recipes`](crate::engine::scorer::score_recipes) this looks at
/// quantities: an ingredient is short when the inventory holds less than the
/// recipe asks for, and names must match exactly (case-insensitive). The score
/// is a flat `100 - 10 * missing`, floored at 0 once more than ten are short
/// (only reachable with `max_missing > 10`). Only `ingredient_match` is filled in the
/// breakdown, as the share of required ingredients fully stocked.
pub fn find_makeable_recipes(
    recipes: &[Recipe],
    inventory: &[InventoryItem],
    max_missing: usize,
) -> Vec<RecipeScore> {
    let quantities = inventory_quantities(inventory);

    let mut makeable: Vec<RecipeScore> = recipes
        .iter()
        .filter_map(|recipe| {
            let mut required = 0usize;
            let mut missing: Vec<String> = Vec::new();
            for ingredient in recipe.required_ingredients() {
                required += 1;
                let on_hand = quantities
                    .get(&ingredient.name.trim().to_lowercase())
                    .copied()
                    .unwrap_or(0.0);
                if on_hand < ingredient.quantity {
                    missing.push(ingredient.name.clone());
                }
            }

            if missing.len() > max_missing {
                debug!(recipe_id = %recipe.id, missing = missing.len(), "not makeable");
                return None;
            }

            let stocked = required - missing.len();
            let ingredient_match = if required == 0 {
                100.0
            } else {
                (stocked as f64 / required as f64 * 100.0).round()
            };
            let score = (100.0 - missing.len() as f64 * FEASIBILITY_PENALTY_PER_MISSING).max(0.0);
            let estimated_cost = estimate_cost(&missing);

            Some(RecipeScore {
                recipe: recipe.clone(),
                score,
                breakdown: ScoreBreakdown {
                    ingredient_match,
                    ..Default::default()
                },
                missing_ingredients: missing,
                estimated_cost,
            })
        })
        .collect();

    sort_by_score_desc(&mut makeable);
    makeable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::Ingredient;
    use crate::engine::tables::DEFAULT_MAX_MISSING_INGREDIENTS;

    fn recipe(id: &str, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            ingredients,
            cooking_time: 10,
            prep_time: 5,
            difficulty: 1,
            tags: vec![],
            nutrition: None,
            bulk_cooking_multiplier: 1.0,
            storage_info: None,
        }
    }

    #[test]
    fn test_quantity_shortfall_counts_as_missing() {
        let recipes = vec![recipe(
            "omelette",
            vec![Ingredient::new("egg", 3.0, "unit"), Ingredient::new("milk", 50.0, "ml")],
        )];
        let inventory = vec![InventoryItem::new("Egg", 2.0), InventoryItem::new("milk", 500.0)];
        let result = find_makeable_recipes(&recipes, &inventory, DEFAULT_MAX_MISSING_INGREDIENTS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].missing_ingredients, vec!["egg"]);
        assert_eq!(result[0].score, 90.0);
        assert_eq!(result[0].breakdown.ingredient_match, 50.0);
        assert_eq!(result[0].estimated_cost, 2.0);
    }

    #[test]
    fn test_repeated_inventory_rows_add_up() {
        let recipes = vec![recipe("omelette", vec![Ingredient::new("egg", 3.0, "unit")])];
        let inventory = vec![InventoryItem::new("egg", 2.0), InventoryItem::new("egg", 1.0)];
        let result = find_makeable_recipes(&recipes, &inventory, 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].score, 100.0);
    }

    #[test]
    fn test_cutoff_and_ordering() {
        let recipes = vec![
            recipe("two-short", vec![Ingredient::new("a", 1.0, "g"), Ingredient::new("b", 1.0, "g")]),
            recipe("three-short", vec![
                Ingredient::new("a", 1.0, "g"),
                Ingredient::new("b", 1.0, "g"),
                Ingredient::new("c", 1.0, "g"),
            ]),
            recipe("ready", vec![Ingredient::new("d", 1.0, "g"), Ingredient::optional("e", 1.0, "g")]),
        ];
        let inventory = vec![InventoryItem::new("d", 1.0)];
        let result = find_makeable_recipes(&recipes, &inventory, 2);
        let ids: Vec<&str> = result.iter().map(|s| s.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["ready", "two-short"]);
        assert_eq!(result[1].score, 80.0);
    }

    #[test]
    fn test_score_floors_at_zero_past_ten_missing() {
        let ingredients: Vec<Ingredient> = (0..11)
            .map(|i| Ingredient::new(&format!("item{}", i), 1.0, "g"))
            .collect();
        let recipes = vec![recipe("long-list", ingredients)];
        let result = find_makeable_recipes(&recipes, &[], 12);
        assert_eq!(result[0].missing_ingredients.len(), 11);
        assert_eq!(result[0].score, 0.0);
    }

    #[test]
    fn test_substring_names_do_not_count_here() {
        let recipes = vec![recipe("r", vec![Ingredient::new("tomato", 1.0, "unit")])];
        let inventory = vec![InventoryItem::new("cherry tomatoes", 10.0)];
        let result = find_makeable_recipes(&recipes, &inventory, 1);
        assert_eq!(result[0].missing_ingredients, vec!["tomato"]);
    }
}
