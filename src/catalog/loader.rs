use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::catalog::error::CatalogError;
use crate::engine::models::{Recipe, RecipeConstraints};

const SNAPSHOT_EXTENSION: &str = "bin";

/// The recipe set a query runs against.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
}

// Accepts both a bare array and `{ "recipes": [...] }`. JSON only; bincode
// cannot drive an untagged enum.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::List(recipes) => recipes,
            CatalogDocument::Wrapped { recipes } => recipes,
        };
        Ok(Self { recipes })
    }

    pub fn from_snapshot_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_snapshot_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(bincode::serialize(self)?)
    }

    /// Loads a catalog, reading `.bin` files as a bincode snapshot and
    /// anything else as JSON. An empty catalog loads with a warning.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let catalog = if is_snapshot(path) {
            let bytes = fs::read(path).await.map_err(|e| CatalogError::io(path, e))?;
            Self::from_snapshot_bytes(&bytes)?
        } else {
            let json = fs::read_to_string(path).await.map_err(|e| CatalogError::io(path, e))?;
            Self::from_json_str(&json)?
        };

        if catalog.recipes.is_empty() {
            warn!(path = ?path, "catalog has no recipes");
        }
        info!(path = ?path, recipes = catalog.recipes.len(), "loaded catalog");
        Ok(catalog)
    }

    pub async fn save_snapshot(&self, path: &Path) -> Result<(), CatalogError> {
        let bytes = self.to_snapshot_bytes()?;
        fs::write(path, &bytes).await.map_err(|e| CatalogError::io(path, e))?;
        info!(path = ?path, bytes = bytes.len(), "wrote catalog snapshot");
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Every recipe except the one with `id`, in catalog order.
    pub fn without(&self, id: &str) -> Vec<Recipe> {
        self.recipes.iter().filter(|recipe| recipe.id != id).cloned().collect()
    }
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SNAPSHOT_EXTENSION))
}

/// Reads a camelCase `RecipeConstraints` document.
pub async fn load_constraints_json(path: &Path) -> Result<RecipeConstraints, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path).await.map_err(|e| CatalogError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}
