use tracing::debug;

use crate::engine::models::Recipe;
use crate::engine::tables::{substitutes_for, MAX_VARIATIONS};

/// Builds substituted copies of `base` using whatever replacements the user
/// has on hand. At most three variants are returned across all ingredients.
pub fn generate_recipe_variations(base: &Recipe, available_ingredients: &[String]) -> Vec<Recipe> {
    let available: Vec<String> = available_ingredients
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let mut variations = Vec::new();
    for (index, ingredient) in base.ingredients.iter().enumerate() {
        for &substitute in substitutes_for(&ingredient.name) {
            if variations.len() >= MAX_VARIATIONS {
                return variations;
            }
            if !available.iter().any(|name| name == substitute) {
                continue;
            }

            let mut variant = base.clone();
            variant.id = format!("{}-var-{}", base.id, substitute);
            variant.name = format!("{} (with {})", base.name, substitute);
            variant.ingredients[index].name = substitute.to_string();
            debug!(recipe_id = %base.id, original = %ingredient.name, %substitute, "generated variation");
            variations.push(variant);
        }
    }
    variations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::Ingredient;

    fn stir_fry() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: "Chicken Stir Fry".to_string(),
            ingredients: vec![
                Ingredient::new("chicken breast", 200.0, "g"),
                Ingredient::new("soy sauce", 2.0, "tbsp"),
                Ingredient::new("rice", 150.0, "g"),
            ],
            cooking_time: 15,
            prep_time: 10,
            difficulty: 2,
            tags: vec!["quick".to_string()],
            nutrition: None,
            bulk_cooking_multiplier: 1.0,
            storage_info: None,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_substitution() {
        let variations = generate_recipe_variations(&stir_fry(), &strings(&["Chicken Thigh", "bread"]));
        assert_eq!(variations.len(), 1);
        let variant = &variations[0];
        assert_eq!(variant.id, "r1-var-chicken thigh");
        assert_eq!(variant.name, "Chicken Stir Fry (with chicken thigh)");
        assert_eq!(variant.ingredients[0].name, "chicken thigh");
        assert_eq!(variant.ingredients[0].quantity, 200.0);
        assert_eq!(variant.ingredients[1].name, "soy sauce");
    }

    #[test]
    fn test_global_cap_of_three() {
        let available = strings(&["chicken thigh", "turkey breast", "tamari", "quinoa", "couscous"]);
        let variations = generate_recipe_variations(&stir_fry(), &available);
        let ids: Vec<&str> = variations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1-var-chicken thigh", "r1-var-turkey breast", "r1-var-tamari"]);
    }

    #[test]
    fn test_no_substitutes_available() {
        assert!(generate_recipe_variations(&stir_fry(), &strings(&["lentils"])).is_empty());
        assert!(generate_recipe_variations(&stir_fry(), &[]).is_empty());
    }

    #[test]
    fn test_base_recipe_untouched() {
        let base = stir_fry();
        let _ = generate_recipe_variations(&base, &strings(&["tamari"]));
        assert_eq!(base, stir_fry());
    }
}
