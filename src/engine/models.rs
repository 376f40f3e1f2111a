use serde::{Deserialize, Serialize};

/// A single line of a recipe's ingredient list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            optional: false,
        }
    }

    pub fn optional(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            optional: true,
            ..Self::new(name, quantity, unit)
        }
    }
}

/// Per-serving macros. Every field may be absent.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NutritionInfo {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StorageInfo {
    #[serde(default)]
    pub fridge_days: Option<u32>,
    #[serde(default)]
    pub freezer_days: Option<u32>,
}

fn default_bulk_multiplier() -> f64 {
    1.0
}

// No `skip_serializing_if` on these types: the bincode snapshot needs every field written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Minutes.
    pub cooking_time: u32,
    /// Minutes.
    pub prep_time: u32,
    pub difficulty: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<NutritionInfo>,
    #[serde(default = "default_bulk_multiplier")]
    pub bulk_cooking_multiplier: f64,
    #[serde(default)]
    pub storage_info: Option<StorageInfo>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.cooking_time.saturating_add(self.prep_time)
    }

    pub fn required_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|ingredient| !ingredient.optional)
    }

    pub fn fridge_days(&self) -> Option<u32> {
        self.storage_info.as_ref().and_then(|info| info.fridge_days)
    }
}

/// What the user currently has, as reported by the inventory service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryItem {
    pub item_name: String,
    pub quantity: f64,
}

impl InventoryItem {
    pub fn new(item_name: &str, quantity: f64) -> Self {
        Self {
            item_name: item_name.to_string(),
            quantity,
        }
    }
}

/// Query-scoped constraints built by the caller for one scoring call.
///
/// Values are not validated here. A negative `max_cooking_time` or a zero
/// `max_difficulty` is scored with the same bounded arithmetic as any other
/// number; rejecting nonsense input is the calling layer's job.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeConstraints {
    pub max_cooking_time: i64,
    pub max_difficulty: i32,
    #[serde(default)]
    pub available_ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub nutrition_targets: Option<NutritionInfo>,
    #[serde(default)]
    pub preferred_tags: Vec<String>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl Default for RecipeConstraints {
    fn default() -> Self {
        Self {
            max_cooking_time: 30,
            max_difficulty: 3,
            available_ingredients: Vec::new(),
            dietary_restrictions: Vec::new(),
            nutrition_targets: None,
            preferred_tags: Vec::new(),
            servings: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub ingredient_match: f64,
    pub time_match: f64,
    pub difficulty_match: f64,
    pub nutrition_match: f64,
    pub preference_match: f64,
}

impl ScoreBreakdown {
    /// Criterion names paired with their values, in weight order.
    pub fn criteria(&self) -> [(&'static str, f64); 5] {
        [
            ("ingredients", self.ingredient_match),
            ("time", self.time_match),
            ("difficulty", self.difficulty_match),
            ("nutrition", self.nutrition_match),
            ("preferences", self.preference_match),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeScore {
    pub recipe: Recipe,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub missing_ingredients: Vec<String>,
    pub estimated_cost: f64,
}
