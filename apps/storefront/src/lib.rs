//! Client-rendered storefront.
//!
//! One page: a product grid fed by the catalog endpoint and a cart sidebar.
//! Cart contents live in memory for the page session only.

mod app;
mod cart;
mod store;

pub use app::App;
pub use store::ShopStore;
