use csv::ReaderBuilder;
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::error::CatalogError;
use crate::engine::models::InventoryItem;

const ITEM_NAME_COL: &str = "item_name";
const QUANTITY_COL: &str = "quantity";

/// Reads a pantry CSV with `item_name` and `quantity` columns, in any order
/// and alongside any other columns. Rows with a blank name are skipped.
pub fn load_inventory_csv(csv_path: &Path) -> Result<Vec<InventoryItem>, CatalogError> {
    if !csv_path.exists() {
        return Err(CatalogError::NotFound(csv_path.to_path_buf()));
    }

    let file = std::fs::File::open(csv_path).map_err(|e| CatalogError::io(csv_path, e))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(ITEM_NAME_COL))
        .ok_or(CatalogError::MissingColumn(ITEM_NAME_COL))?;
    let quantity_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(QUANTITY_COL))
        .ok_or(CatalogError::MissingColumn(QUANTITY_COL))?;

    let mut items = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        // +2: one for the header, one for 1-based rows
        let row = row_index + 2;

        let name = record.get(name_idx).unwrap_or("").to_string();
        if name.is_empty() {
            warn!(row, "skipping inventory row with empty item name");
            continue;
        }

        let raw_quantity = record.get(quantity_idx).unwrap_or("");
        let quantity = raw_quantity
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| CatalogError::InvalidQuantity {
                row,
                value: raw_quantity.to_string(),
            })?;

        items.push(InventoryItem {
            item_name: name,
            quantity,
        });
    }

    if items.is_empty() {
        warn!(path = ?csv_path, "inventory file has no items");
    } else {
        info!(path = ?csv_path, items = items.len(), "loaded inventory");
    }
    Ok(items)
}
