//! Product catalog module.
//!
//! Contains product types, the load state machine, and the loader.

mod loader;
mod product;
mod state;

pub use loader::{parse_catalog, CatalogClient};
pub use product::{Product, Rating};
pub use state::{Catalog, CatalogState, LoadTicket};
