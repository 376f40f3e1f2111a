pub mod error;
pub mod inventory;
pub mod loader;

pub use error::CatalogError;
pub use inventory::load_inventory_csv;
pub use loader::{load_constraints_json, Catalog};
