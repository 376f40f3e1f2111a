//! Hand-authored constants the engine reads. Treat edits here as a versioned
//! change to scoring behaviour: tests pin several of these values.

pub const INGREDIENT_WEIGHT: f64 = 0.35;
pub const TIME_WEIGHT: f64 = 0.25;
pub const DIFFICULTY_WEIGHT: f64 = 0.15;
pub const NUTRITION_WEIGHT: f64 = 0.15;
pub const PREFERENCE_WEIGHT: f64 = 0.10;

/// Score given to a criterion with nothing to judge it on.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub const TIME_PENALTY_PER_MINUTE: i64 = 2;
pub const TIME_PENALTY_CAP: i64 = 80;
pub const TIME_SCORE_FLOOR: i64 = 20;
pub const DIFFICULTY_PENALTY_PER_LEVEL: i32 = 25;

pub const CALORIE_DIVISOR: f64 = 10.0;
pub const MACRO_MULTIPLIER: f64 = 2.0;

pub const FEASIBILITY_PENALTY_PER_MISSING: f64 = 10.0;
pub const DEFAULT_MAX_MISSING_INGREDIENTS: usize = 2;

pub const BULK_COOKING_BONUS: f64 = 20.0;
pub const DEFAULT_BULK_STORAGE_DAYS: u32 = 4;

pub const COMPLEMENTARY_PROTEIN_MIN: f64 = 10.0;
pub const COMPLEMENTARY_CARBS_MIN: f64 = 20.0;
pub const COMPLEMENTARY_FAT_MIN: f64 = 5.0;
pub const MAX_COMPLEMENTARY_RECIPES: usize = 5;

pub const MAX_VARIATIONS: usize = 3;

/// Price in GBP used when no table entry matches.
pub const PLACEHOLDER_PRICE: f64 = 1.5;

/// Rough GBP price per purchase unit. First key contained in the ingredient
/// name wins, so more specific keys sit above generic ones.
pub const PRICE_TABLE: &[(&str, f64)] = &[
    ("chicken breast", 3.5),
    ("chicken thigh", 2.8),
    ("chicken", 3.0),
    ("turkey", 3.2),
    ("beef", 4.5),
    ("pork", 3.5),
    ("mince", 3.0),
    ("salmon", 4.0),
    ("tuna", 1.2),
    ("fish", 3.5),
    ("tofu", 1.8),
    ("egg", 2.0),
    ("milk", 1.2),
    ("cheddar", 2.5),
    ("cheese", 2.5),
    ("butter", 1.8),
    ("yogurt", 1.1),
    ("rice", 1.0),
    ("pasta", 0.9),
    ("noodle", 1.0),
    ("bread", 1.2),
    ("flour", 0.8),
    ("oats", 0.9),
    ("potato", 1.0),
    ("onion", 0.5),
    ("garlic", 0.4),
    ("tomato", 0.8),
    ("pepper", 0.6),
    ("carrot", 0.4),
    ("spinach", 1.0),
    ("broccoli", 0.7),
    ("lentil", 1.0),
    ("chickpea", 0.7),
    ("beans", 0.7),
    ("soy sauce", 1.2),
    ("olive oil", 3.0),
    ("oil", 1.5),
];

/// Acceptable replacements keyed by lower-cased ingredient name.
pub const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("chicken breast", &["chicken thigh", "turkey breast"]),
    ("beef mince", &["pork mince", "turkey mince", "lentils"]),
    ("butter", &["margarine", "olive oil"]),
    ("milk", &["oat milk", "soy milk"]),
    ("rice", &["quinoa", "couscous"]),
    ("pasta", &["wholewheat pasta", "rice noodles"]),
    ("soy sauce", &["tamari"]),
    ("cream", &["greek yogurt", "creme fraiche"]),
    ("onion", &["shallot", "leek"]),
    ("spinach", &["kale"]),
    ("cheddar", &["mozzarella", "red leicester"]),
    ("tofu", &["tempeh", "chickpeas"]),
    ("sour cream", &["greek yogurt"]),
];

/// Heuristic price for one ingredient, matched by case-insensitive substring.
pub fn ingredient_price(name: &str) -> f64 {
    let name = name.to_lowercase();
    PRICE_TABLE
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, price)| *price)
        .unwrap_or(PLACEHOLDER_PRICE)
}

/// Substitutes for an ingredient, by case-insensitive exact name.
pub fn substitutes_for(name: &str) -> &'static [&'static str] {
    let name = name.trim().to_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}
