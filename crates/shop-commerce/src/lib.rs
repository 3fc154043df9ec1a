//! Catalog and cart domain logic for the storefront.
//!
//! - **Catalog**: products, the Loading/Error/Loaded state machine, and the
//!   loader that fetches the listing endpoint
//! - **Cart**: insertion-ordered cart lines with add, update, remove, and
//!   derived count and subtotal
//!
//! Everything here is plain data plus synchronous operations, except
//! [`CatalogClient::fetch`], the one suspending call. The presentation layer
//! owns instances and decides how to make them reactive.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let loader = CatalogClient::from_config(&FetchConfig::default())?;
//! let mut catalog = Catalog::new();
//! loader.load(&mut catalog).await;
//!
//! let mut cart = Cart::new();
//! if let Some(product) = catalog.products().first() {
//!     cart.add_to_cart(product);
//! }
//! println!("{} items, {}", cart.cart_count(), cart.cart_total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::LoadError;
pub use ids::ProductId;
pub use money::Amount;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::LoadError;
    pub use crate::ids::ProductId;
    pub use crate::money::Amount;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogClient, CatalogState, LoadTicket, Product, Rating};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    pub use shop_data::FetchConfig;
}
