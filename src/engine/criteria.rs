use crate::engine::models::{NutritionInfo, Recipe};
use crate::engine::tables::{
    CALORIE_DIVISOR, DIFFICULTY_PENALTY_PER_LEVEL, MACRO_MULTIPLIER, NEUTRAL_SCORE,
    TIME_PENALTY_CAP, TIME_PENALTY_PER_MINUTE, TIME_SCORE_FLOOR,
};

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Bidirectional, case-insensitive substring test: "tomato" matches
/// "cherry tomatoes" and "olive oil" matches "oil". Blank entries never match.
pub fn is_available(ingredient_name: &str, available: &[String]) -> bool {
    let name = ingredient_name.trim().to_lowercase();
    if name.is_empty() {
        return false;
    }
    available.iter().any(|entry| {
        let entry = entry.trim().to_lowercase();
        !entry.is_empty() && (name.contains(&entry) || entry.contains(&name))
    })
}

/// Share of required ingredients covered by `available`, 0-100.
/// Blank or whitespace-only entries in `available` never count as available.
pub fn ingredient_match(recipe: &Recipe, available: &[String]) -> f64 {
    let (required, matched) = recipe
        .required_ingredients()
        .fold((0usize, 0usize), |(required, matched), ingredient| {
            let hit = is_available(&ingredient.name, available) as usize;
            (required + 1, matched + hit)
        });

    if required == 0 {
        return 100.0;
    }
    clamp_score((matched as f64 / required as f64 * 100.0).round())
}

/// Full marks within `max_time`; two points per extra minute, never below 20.
pub fn time_match(recipe: &Recipe, max_time: i64) -> f64 {
    let total = i64::from(recipe.total_time());
    if total <= max_time {
        return 100.0;
    }
    let penalty = total
        .saturating_sub(max_time)
        .saturating_mul(TIME_PENALTY_PER_MINUTE)
        .min(TIME_PENALTY_CAP);
    clamp_score((100 - penalty).max(TIME_SCORE_FLOOR) as f64)
}

/// 25 points lost per level above `max_difficulty`. Unlike time, this can reach zero.
pub fn difficulty_match(recipe: &Recipe, max_difficulty: i32) -> f64 {
    let difficulty = i32::from(recipe.difficulty);
    if difficulty <= max_difficulty {
        return 100.0;
    }
    let gap = difficulty.saturating_sub(max_difficulty);
    let score = 100i32.saturating_sub(gap.saturating_mul(DIFFICULTY_PENALTY_PER_LEVEL));
    clamp_score(f64::from(score.max(0)))
}

/// Closeness to the calorie/protein/carb targets. Fat is not scored here.
///
/// Neutral when either side has no data, including when every targeted macro
/// is missing from the recipe.
pub fn nutrition_match(recipe: &Recipe, targets: Option<&NutritionInfo>) -> f64 {
    let (Some(targets), Some(nutrition)) = (targets, recipe.nutrition.as_ref()) else {
        return NEUTRAL_SCORE;
    };

    let criteria: [(Option<f64>, Option<f64>, fn(f64) -> f64); 3] = [
        (targets.calories, nutrition.calories, |diff| diff / CALORIE_DIVISOR),
        (targets.protein, nutrition.protein, |diff| diff * MACRO_MULTIPLIER),
        (targets.carbs, nutrition.carbs, |diff| diff * MACRO_MULTIPLIER),
    ];

    let mut total = 0.0;
    let mut count = 0;
    for (target, actual, scale) in criteria {
        if let (Some(target), Some(actual)) = (target, actual) {
            total += (100.0 - scale((actual - target).abs())).max(0.0);
            count += 1;
        }
    }

    if count == 0 {
        NEUTRAL_SCORE
    } else {
        clamp_score(total / count as f64)
    }
}

/// Share of `preferred_tags` found on the recipe (exact, case-insensitive).
pub fn preference_match(recipe: &Recipe, preferred_tags: &[String]) -> f64 {
    if preferred_tags.is_empty() {
        return NEUTRAL_SCORE;
    }
    let tags: Vec<String> = recipe.tags.iter().map(|tag| tag.to_lowercase()).collect();
    let overlap = preferred_tags
        .iter()
        .filter(|preferred| tags.contains(&preferred.to_lowercase()))
        .count();
    clamp_score((overlap as f64 / preferred_tags.len() as f64 * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::Ingredient;

    fn recipe(ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: "t1".to_string(),
            name: "Test".to_string(),
            ingredients,
            cooking_time: 20,
            prep_time: 10,
            difficulty: 3,
            tags: vec!["Quick".to_string(), "vegetarian".to_string()],
            nutrition: Some(NutritionInfo {
                calories: Some(500.0),
                protein: Some(20.0),
                carbs: Some(60.0),
                fat: Some(15.0),
            }),
            bulk_cooking_multiplier: 1.0,
            storage_info: None,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_match_both_directions() {
        assert!(is_available("tomato", &strings(&["Cherry Tomatoes"])));
        assert!(is_available("olive oil", &strings(&["oil"])));
        assert!(!is_available("chicken breast", &strings(&["chicken thigh"])));
    }

    #[test]
    fn test_blank_entries_never_match() {
        assert!(!is_available("rice", &strings(&["", "   "])));
        assert!(!is_available("", &strings(&["rice"])));
    }

    #[test]
    fn test_ingredient_match_ignores_optional() {
        let r = recipe(vec![
            Ingredient::new("rice", 100.0, "g"),
            Ingredient::new("onion", 1.0, "unit"),
            Ingredient::new("garlic", 2.0, "clove"),
            Ingredient::optional("parsley", 1.0, "tbsp"),
        ]);
        assert_eq!(ingredient_match(&r, &strings(&["rice"])), 33.0);
        assert_eq!(ingredient_match(&r, &strings(&["rice", "onion"])), 67.0);
    }

    #[test]
    fn test_ingredient_match_blank_entries_cover_nothing() {
        let r = recipe(vec![Ingredient::new("rice", 100.0, "g"), Ingredient::new("onion", 1.0, "unit")]);
        assert_eq!(ingredient_match(&r, &strings(&["", " "])), 0.0);
        assert_eq!(ingredient_match(&r, &strings(&["", "onion"])), 50.0);
    }

    #[test]
    fn test_ingredient_match_no_required_is_full() {
        let r = recipe(vec![Ingredient::optional("salt", 1.0, "pinch")]);
        assert_eq!(ingredient_match(&r, &[]), 100.0);
    }

    #[test]
    fn test_time_match_penalty_and_floor() {
        let r = recipe(vec![]);
        assert_eq!(time_match(&r, 30), 100.0);
        assert_eq!(time_match(&r, 25), 90.0);
        assert_eq!(time_match(&r, 0), 40.0);
        assert_eq!(time_match(&r, -500), 20.0);
    }

    #[test]
    fn test_difficulty_match_can_reach_zero() {
        let mut r = recipe(vec![]);
        assert_eq!(difficulty_match(&r, 3), 100.0);
        assert_eq!(difficulty_match(&r, 2), 75.0);
        r.difficulty = 9;
        assert_eq!(difficulty_match(&r, 1), 0.0);
    }

    #[test]
    fn test_nutrition_match_neutral_without_data() {
        let mut r = recipe(vec![]);
        assert_eq!(nutrition_match(&r, None), NEUTRAL_SCORE);
        let targets = NutritionInfo { protein: Some(30.0), ..Default::default() };
        r.nutrition = None;
        assert_eq!(nutrition_match(&r, Some(&targets)), NEUTRAL_SCORE);
        r.nutrition = Some(NutritionInfo { calories: Some(400.0), ..Default::default() });
        assert_eq!(nutrition_match(&r, Some(&targets)), NEUTRAL_SCORE);
    }

    #[test]
    fn test_nutrition_match_averages_specified_targets() {
        let r = recipe(vec![]);
        let targets = NutritionInfo {
            calories: Some(600.0),      // |500-600|/10 = 10 -> 90
            protein: Some(30.0),        // |20-30|*2 = 20 -> 80
            carbs: None,
            fat: Some(100.0),           // ignored
        };
        assert_eq!(nutrition_match(&r, Some(&targets)), 85.0);
    }

    #[test]
    fn test_nutrition_match_floors_each_criterion() {
        let r = recipe(vec![]);
        let targets = NutritionInfo { carbs: Some(0.0), protein: Some(20.0), ..Default::default() };
        // carbs: 100 - 120 -> 0, protein exact -> 100
        assert_eq!(nutrition_match(&r, Some(&targets)), 50.0);
    }

    #[test]
    fn test_preference_match_exact_tags() {
        let r = recipe(vec![]);
        assert_eq!(preference_match(&r, &[]), NEUTRAL_SCORE);
        assert_eq!(preference_match(&r, &strings(&["quick"])), 100.0);
        assert_eq!(preference_match(&r, &strings(&["quick", "asian", "spicy"])), 33.0);
        assert_eq!(preference_match(&r, &strings(&["veg"])), 0.0);
    }
}
