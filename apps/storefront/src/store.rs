//! Reactive shop state.
//!
//! Wraps the plain [`Catalog`] and [`Cart`] in signals so every view that
//! reads them re-renders after a mutation. All writes go through the domain
//! operations, never through the signals directly.

use leptos::prelude::*;
use shop_commerce::prelude::*;
use shop_data::Transport;

/// Catalog, cart, and sidebar visibility for one page session.
#[derive(Debug, Clone, Copy)]
pub struct ShopStore {
    catalog: RwSignal<Catalog>,
    cart: RwSignal<Cart>,
    cart_open: RwSignal<bool>,
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopStore {
    /// Empty cart, closed sidebar, catalog in `Loading`.
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Catalog::new()),
            cart: RwSignal::new(Cart::new()),
            cart_open: RwSignal::new(false),
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Start a load cycle and finish it when the fetch resolves.
    ///
    /// Calling this again before the first fetch resolves supersedes it.
    pub fn load<T: Transport + 'static>(&self, loader: CatalogClient<T>) {
        let Some(ticket) = self.catalog.try_update(Catalog::begin_load) else {
            return;
        };
        tracing::debug!(?ticket, "starting catalog load");

        let catalog = self.catalog;
        leptos::task::spawn_local(async move {
            let result = loader.fetch().await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "catalog load failed");
            }
            catalog.update(|catalog| {
                catalog.finish_load(ticket, result);
            });
        });
    }

    /// Fail the catalog without fetching, e.g. when no usable loader exists.
    pub fn reject_load(&self, err: LoadError) {
        tracing::warn!(error = %err, "catalog load rejected before fetch");
        self.catalog.update(|catalog| {
            let ticket = catalog.begin_load();
            catalog.finish_load(ticket, Err(err));
        });
    }

    /// Snapshot of the catalog state.
    pub fn catalog_state(&self) -> CatalogState {
        self.catalog.with(|catalog| catalog.state().clone())
    }

    // ========================================================================
    // Cart
    // ========================================================================

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.update(|cart| {
            cart.add_to_cart(product);
        });
    }

    pub fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.cart.update(|cart| {
            cart.update_quantity(id, quantity);
        });
    }

    pub fn remove_from_cart(&self, id: &ProductId) {
        self.cart.update(|cart| {
            cart.remove_from_cart(id);
        });
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.with(|cart| cart.lines().to_vec())
    }

    pub fn cart_count(&self) -> i64 {
        self.cart.with(Cart::cart_count)
    }

    pub fn cart_total(&self) -> Amount {
        self.cart.with(Cart::cart_total)
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    // ========================================================================
    // Sidebar
    // ========================================================================

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn test_new_store() {
        with_owner(|| {
            let store = ShopStore::new();
            assert!(store.catalog_state().is_loading());
            assert!(store.cart_is_empty());
            assert!(!store.is_cart_open());
        });
    }

    #[test]
    fn test_cart_operations_flow_through() {
        with_owner(|| {
            let store = ShopStore::new();
            let product = Product::new("1", "Backpack", 109.95);

            store.add_to_cart(&product);
            store.add_to_cart(&product);
            assert_eq!(store.cart_count(), 2);
            assert_eq!(store.cart_total().display(), "$219.90");

            store.update_quantity(&product.id, 0);
            assert!(store.cart_is_empty());

            store.add_to_cart(&product);
            store.remove_from_cart(&product.id);
            assert_eq!(store.cart_lines(), Vec::<CartLine>::new());
        });
    }

    #[test]
    fn test_reject_load_shows_message() {
        with_owner(|| {
            let store = ShopStore::new();
            store.reject_load(LoadError::InvalidEndpoint("not a url".into()));

            assert_eq!(
                store.catalog_state(),
                CatalogState::Error("The store is not configured correctly.".into())
            );
        });
    }

    #[test]
    fn test_sidebar_toggle() {
        with_owner(|| {
            let store = ShopStore::new();
            store.open_cart();
            assert!(store.is_cart_open());
            store.close_cart();
            assert!(!store.is_cart_open());
        });
    }
}
