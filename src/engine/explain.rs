use std::fmt;

use crate::engine::models::RecipeScore;

const STRONG_THRESHOLD: f64 = 80.0;
const WEAK_THRESHOLD: f64 = 50.0;

/// Short, ordered reasons behind a score: strong and weak criteria first,
/// then what needs buying, then the criterion dragging the total down most.
pub fn explain_score(score: &RecipeScore) -> Vec<String> {
    let mut reasons = Vec::new();
    let criteria = score.breakdown.criteria();

    for (name, value) in criteria {
        if value >= STRONG_THRESHOLD {
            reasons.push(format!("strong {} match ({:.0})", name, value));
        } else if value < WEAK_THRESHOLD {
            reasons.push(format!("weak {} match ({:.0})", name, value));
        }
    }

    if score.missing_ingredients.is_empty() {
        reasons.push("nothing to buy".to_string());
    } else {
        reasons.push(format!(
            "needs {} (about £{:.2})",
            score.missing_ingredients.join(", "),
            score.estimated_cost
        ));
    }

    // `min_by` keeps the first of equal values, so ties go to the heavier-weighted criterion.
    if let Some((name, value)) = criteria
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, value)| *value < 100.0)
    {
        reasons.push(format!("held back most by {} ({:.0})", name, value));
    }
    reasons
}

impl fmt::Display for RecipeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5.0}  {} [{}]",
            self.score, self.recipe.name, self.recipe.id
        )?;
        if !self.missing_ingredients.is_empty() {
            write!(
                f,
                "  missing {} (£{:.2})",
                self.missing_ingredients.len(),
                self.estimated_cost
            )?;
        }
        Ok(())
    }
}
