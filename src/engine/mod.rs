//! Pure, synchronous recipe ranking. Nothing in here performs I/O or holds
//! state between calls, so every function is safe to call from any thread.

pub mod criteria;
pub mod explain;
pub mod feasibility;
pub mod models;
pub mod scorer;
pub mod selection;
pub mod tables;
pub mod variations;

pub use explain::explain_score;
pub use feasibility::find_makeable_recipes;
pub use models::{
    Ingredient, InventoryItem, NutritionInfo, Recipe, RecipeConstraints, RecipeScore, ScoreBreakdown,
    StorageInfo,
};
pub use scorer::score_recipes;
pub use selection::{filter_by_dietary_restrictions, find_complementary_recipes, suggest_bulk_cooking_recipes};
pub use variations::generate_recipe_variations;
