use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::models::{NutritionInfo, RecipeConstraints};
use crate::engine::tables::{DEFAULT_BULK_STORAGE_DAYS, DEFAULT_MAX_MISSING_INGREDIENTS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank recipes against what you have and what you want", long_about = None)]
pub struct Cli {
    /// Recipe catalog: JSON, or a .bin snapshot
    #[arg(short, long, env = "RECIPE_RANK_CATALOG")]
    pub catalog: PathBuf,

    /// Pantry CSV with item_name and quantity columns
    #[arg(short, long, env = "RECIPE_RANK_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank every recipe by overall fit
    Score {
        #[command(flatten)]
        constraints: ConstraintArgs,
        /// Show only the top N
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recipes cookable from the inventory by quantity
    Makeable {
        #[arg(long, default_value_t = DEFAULT_MAX_MISSING_INGREDIENTS)]
        max_missing: usize,
    },
    /// Recipes worth cooking in bulk
    Bulk {
        #[command(flatten)]
        constraints: ConstraintArgs,
        /// Minimum fridge shelf life in days
        #[arg(long, default_value_t = DEFAULT_BULK_STORAGE_DAYS)]
        days: u32,
    },
    /// Recipes that fill the macro gap left by a base recipe
    Complement {
        /// Id of the base recipe
        #[arg(long)]
        base: String,
        #[command(flatten)]
        targets: TargetArgs,
    },
    /// Substituted versions of a recipe
    Variations {
        /// Id of the base recipe
        #[arg(long)]
        base: String,
        /// Ingredients available for substitution (comma separated)
        #[arg(long, value_delimiter = ',')]
        have: Vec<String>,
    },
    /// Write the catalog as a bincode snapshot
    Snapshot {
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    #[arg(long)]
    pub target_calories: Option<f64>,
    #[arg(long)]
    pub target_protein: Option<f64>,
    #[arg(long)]
    pub target_carbs: Option<f64>,
    #[arg(long)]
    pub target_fat: Option<f64>,
}

impl TargetArgs {
    pub fn to_nutrition(&self) -> Option<NutritionInfo> {
        let targets = NutritionInfo {
            calories: self.target_calories,
            protein: self.target_protein,
            carbs: self.target_carbs,
            fat: self.target_fat,
        };
        if targets == NutritionInfo::default() {
            None
        } else {
            Some(targets)
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConstraintArgs {
    /// Start from a RecipeConstraints JSON file; flags below override it
    #[arg(long)]
    pub constraints: Option<PathBuf>,
    /// Maximum total minutes (prep + cooking)
    #[arg(long)]
    pub max_time: Option<i64>,
    #[arg(long)]
    pub max_difficulty: Option<i32>,
    /// Ingredients you have or can get (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub have: Vec<String>,
    /// Required dietary tags (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub diet: Vec<String>,
    /// Preferred tags (comma separated)
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
    #[arg(long)]
    pub servings: Option<u32>,
    #[command(flatten)]
    pub targets: TargetArgs,
}

impl ConstraintArgs {
    /// Layers the flags over `base`. List flags extend, scalar flags replace.
    pub fn apply_to(&self, mut base: RecipeConstraints) -> RecipeConstraints {
        if let Some(max_time) = self.max_time {
            base.max_cooking_time = max_time;
        }
        if let Some(max_difficulty) = self.max_difficulty {
            base.max_difficulty = max_difficulty;
        }
        base.available_ingredients.extend(self.have.iter().cloned());
        base.dietary_restrictions.extend(self.diet.iter().cloned());
        base.preferred_tags.extend(self.tags.iter().cloned());
        if self.servings.is_some() {
            base.servings = self.servings;
        }
        if let Some(targets) = self.targets.to_nutrition() {
            base.nutrition_targets = Some(targets);
        }
        base
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
