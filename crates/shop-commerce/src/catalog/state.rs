//! Catalog load state machine.
//!
//! ```text
//!   begin_load ──▶ Loading ──finish_load(Ok)──▶ Loaded(products)
//!                     │
//!                     └────finish_load(Err)──▶ Error(message)
//! ```
//!
//! Every `begin_load` starts a new cycle and hands out a [`LoadTicket`].
//! Only the ticket of the latest cycle may finish it, and only once, so a
//! slow response from a superseded load never overwrites a newer one.

use crate::catalog::Product;
use crate::error::LoadError;
use crate::ids::ProductId;

/// What the storefront can show for the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Request in flight.
    #[default]
    Loading,
    /// Load failed; carries the user-facing message.
    Error(String),
    /// Products in response order.
    Loaded(Vec<Product>),
}

impl CatalogState {
    /// Check if a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// The error message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded products; empty while loading or after an error.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            _ => &[],
        }
    }
}

/// Proof of which load cycle a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Catalog state plus the bookkeeping that orders load cycles.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    state: CatalogState,
    generation: u64,
}

impl Catalog {
    /// A catalog in the initial `Loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Loaded products; empty unless `Loaded`.
    pub fn products(&self) -> &[Product] {
        self.state.products()
    }

    /// Look up a loaded product.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.products() {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Start a new load cycle. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = CatalogState::Loading;
        LoadTicket(self.generation)
    }

    /// Complete the cycle `ticket` belongs to.
    ///
    /// Returns `false`, leaving state untouched, when the ticket is stale or
    /// its cycle already finished.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, LoadError>,
    ) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale catalog result"
            );
            return false;
        }

        self.state = match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                CatalogState::Loaded(products)
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog load failed");
                CatalogState::Error(err.user_message().to_string())
            }
        };
        true
    }
}
