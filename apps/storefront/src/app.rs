//! Application shell and catalog components.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use shop_commerce::prelude::*;
use shop_data::DEFAULT_ENDPOINT;

use crate::cart::CartSidebar;
use crate::store::ShopStore;

/// Listing endpoint, overridable at build time with `SHOP_API_URL`.
const API_URL: &str = match option_env!("SHOP_API_URL") {
    Some(url) => url,
    None => DEFAULT_ENDPOINT,
};

/// Header navigation labels. The links go nowhere yet.
const NAV_LINKS: [&str; 4] = ["Home", "Deals", "New Arrivals", "Categories"];

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = ShopStore::new();
    match CatalogClient::from_config(&FetchConfig::new(API_URL)) {
        Ok(loader) => store.load(loader),
        Err(err) => store.reject_load(err),
    }

    view! {
        <Link rel="stylesheet" href=BOOTSTRAP_CSS/>
        <Meta name="description" content="Browse products and build a cart"/>
        <Title text="Shop"/>

        <Header store=store/>
        <main class="container py-4">
            <CatalogView store=store/>
        </main>
        <CartSidebar store=store/>
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(store: ShopStore) -> impl IntoView {
    let count = move || store.cart_count();

    view! {
        <nav class="navbar navbar-dark bg-dark fixed-top">
            <div class="container">
                <span class="navbar-brand">"Shop"</span>
                <ul class="navbar-nav flex-row gap-3 me-auto ms-3">
                    {NAV_LINKS
                        .into_iter()
                        .map(|label| view! {
                            <li class="nav-item"><a class="nav-link" href="#">{label}</a></li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button
                    type="button"
                    class="btn btn-outline-light position-relative"
                    on:click=move |_| store.open_cart()
                >
                    "Cart"
                    <Show when=move || { count() > 0 }>
                        <span class="position-absolute top-0 start-100 translate-middle badge rounded-pill bg-danger">
                            {count}
                        </span>
                    </Show>
                </button>
            </div>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-top py-3 text-center text-muted small">
            {format!("© {year} Shop")}
        </footer>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CatalogView(store: ShopStore) -> impl IntoView {
    move || match store.catalog_state() {
        CatalogState::Loading => view! { <LoadingSpinner/> }.into_any(),
        CatalogState::Error(message) => view! {
            <div class="alert alert-danger" role="alert">{message}</div>
        }
        .into_any(),
        CatalogState::Loaded(products) => view! {
            <ProductGrid store=store products=products/>
        }
        .into_any(),
    }
}

#[component]
fn ProductGrid(store: ShopStore, products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="row row-cols-1 row-cols-sm-2 row-cols-lg-4 g-4">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard store=store product=product/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ProductCard(store: ShopStore, product: Product) -> impl IntoView {
    let price = product.price.display();
    let rating = product.rating.as_ref().map(Rating::summary);
    let title = product.title.clone();
    let image = product.image.clone();
    let category = product.category.clone();

    view! {
        <div class="col">
            <div class="card h-100 product-card">
                <img src=image class="card-img-top" alt=title.clone()/>
                <div class="card-body d-flex flex-column">
                    <span class="badge bg-secondary align-self-start mb-2">{category}</span>
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text fw-bold mb-1">{price}</p>
                    {rating.map(|summary| view! {
                        <p class="card-text text-muted small">"★ " {summary}</p>
                    })}
                    <button
                        type="button"
                        class="btn btn-primary mt-auto"
                        on:click=move |_| store.add_to_cart(&product)
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner d-flex justify-content-center align-items-center">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links() {
        assert_eq!(NAV_LINKS, ["Home", "Deals", "New Arrivals", "Categories"]);
    }
}
