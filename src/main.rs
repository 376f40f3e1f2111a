use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recipe_rank::catalog::{load_constraints_json, load_inventory_csv, Catalog};
use recipe_rank::cli::{parse_args, Command, ConstraintArgs};
use recipe_rank::engine::{
    explain_score, filter_by_dietary_restrictions, find_complementary_recipes, find_makeable_recipes,
    generate_recipe_variations, score_recipes, suggest_bulk_cooking_recipes, Recipe, RecipeConstraints,
    RecipeScore,
};

fn init_logging() {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

async fn build_constraints(args: &ConstraintArgs) -> Result<RecipeConstraints> {
    let base = match &args.constraints {
        Some(path) => load_constraints_json(path)
            .await
            .with_context(|| format!("Failed to read constraints file '{}'", path.display()))?,
        None => RecipeConstraints::default(),
    };
    Ok(args.apply_to(base))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

fn print_scores(scores: &[RecipeScore], json: bool) -> Result<()> {
    if json {
        return print_json(scores);
    }
    if scores.is_empty() {
        println!("No recipes matched.");
    }
    for score in scores {
        println!("{}", score);
        for reason in explain_score(score) {
            println!("         - {}", reason);
        }
    }
    Ok(())
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<()> {
    if json {
        return print_json(recipes);
    }
    if recipes.is_empty() {
        println!("No recipes found.");
    }
    let opt_to_str = |val: Option<f64>| val.map_or_else(|| "N/A".to_string(), |v| format!("{:.0}", v));
    for recipe in recipes {
        let nutrition = recipe.nutrition.clone().unwrap_or_default();
        println!(
            "{} [{}]  {} min, difficulty {}  (kcal {}, P {} g, C {} g, F {} g)",
            recipe.name,
            recipe.id,
            recipe.total_time(),
            recipe.difficulty,
            opt_to_str(nutrition.calories),
            opt_to_str(nutrition.protein),
            opt_to_str(nutrition.carbs),
            opt_to_str(nutrition.fat),
        );
        let ingredients: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| format!("{} {} {}{}", i.quantity, i.unit, i.name, if i.optional { " (optional)" } else { "" }))
            .collect();
        println!("    {}", ingredients.join(", "));
    }
    Ok(())
}

fn find_base<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Recipe> {
    catalog
        .find(id)
        .ok_or_else(|| anyhow!("Recipe '{}' not found in catalog", id))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = parse_args();

    let catalog = Catalog::load(&cli.catalog)
        .await
        .with_context(|| format!("Failed to load recipe catalog '{}'", cli.catalog.display()))?;

    let inventory = match &cli.inventory {
        Some(path) => load_inventory_csv(path)
            .with_context(|| format!("Failed to load inventory '{}'", path.display()))?,
        None => Vec::new(),
    };

    match &cli.command {
        Command::Score { constraints, limit } => {
            let constraints = build_constraints(constraints).await?;
            let recipes = filter_by_dietary_restrictions(&catalog.recipes, &constraints.dietary_restrictions);
            let mut scores = score_recipes(&recipes, &constraints, &inventory);
            if let Some(limit) = limit {
                scores.truncate(*limit);
            }
            print_scores(&scores, cli.json)?;
        }
        Command::Makeable { max_missing } => {
            if inventory.is_empty() {
                info!("no inventory given; every ingredient counts as missing");
            }
            let scores = find_makeable_recipes(&catalog.recipes, &inventory, *max_missing);
            print_scores(&scores, cli.json)?;
        }
        Command::Bulk { constraints, days } => {
            let constraints = build_constraints(constraints).await?;
            let recipes = filter_by_dietary_restrictions(&catalog.recipes, &constraints.dietary_restrictions);
            let scores = suggest_bulk_cooking_recipes(&recipes, &constraints, *days);
            print_scores(&scores, cli.json)?;
        }
        Command::Complement { base, targets } => {
            let base = find_base(&catalog, base)?;
            let targets = targets
                .to_nutrition()
                .ok_or_else(|| anyhow!("At least one --target-* flag is required"))?;
            let candidates = catalog.without(&base.id);
            let complements = find_complementary_recipes(base, &candidates, &targets);
            print_recipes(&complements, cli.json)?;
        }
        Command::Variations { base, have } => {
            let base = find_base(&catalog, base)?;
            let variations = generate_recipe_variations(base, have);
            print_recipes(&variations, cli.json)?;
        }
        Command::Snapshot { out } => {
            catalog
                .save_snapshot(out)
                .await
                .with_context(|| format!("Failed to write snapshot '{}'", out.display()))?;
            println!("Wrote {} recipes to {}", catalog.recipes.len(), out.display());
        }
    }

    Ok(())
}
