//! Cart sidebar components.

use leptos::prelude::*;
use shop_commerce::prelude::*;

use crate::store::ShopStore;

// ============================================================================
// Sidebar
// ============================================================================

#[component]
pub fn CartSidebar(store: ShopStore) -> impl IntoView {
    view! {
        <Show when=move || store.is_cart_open()>
            <div class="cart-overlay" on:click=move |_| store.close_cart()></div>
        </Show>
        <aside class="cart-sidebar" class:open=move || store.is_cart_open()>
            <div class="d-flex justify-content-between align-items-center border-bottom p-3">
                <h5 class="mb-0">"Your Cart"</h5>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| store.close_cart()
                ></button>
            </div>

            <div class="cart-lines p-3">
                <Show when=move || !store.cart_is_empty() fallback=|| view! { <EmptyCart/> }>
                    <For
                        each=move || store.cart_lines()
                        key=|line: &CartLine| (line.id().clone(), line.quantity)
                        children=move |line: CartLine| view! { <CartItem store=store line=line/> }
                    />
                </Show>
            </div>

            <Show when=move || !store.cart_is_empty()>
                <div class="border-top p-3">
                    <div class="d-flex justify-content-between fw-bold mb-3">
                        <span>"Subtotal"</span>
                        <span>{move || store.cart_total().display()}</span>
                    </div>
                    <button type="button" class="btn btn-success w-100">
                        "Proceed to Checkout"
                    </button>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <p class="text-muted text-center my-5">"Your cart is empty."</p>
    }
}

// ============================================================================
// Cart Line
// ============================================================================

#[component]
fn CartItem(store: ShopStore, line: CartLine) -> impl IntoView {
    let quantity = line.quantity;
    let subtotal = line.subtotal().display();
    let unit_price = line.product.price.display();
    let CartLine { product, .. } = line;
    let Product { id, title, image, .. } = product;

    let dec_id = id.clone();
    let inc_id = id.clone();

    view! {
        <div class="cart-line d-flex align-items-center gap-3 mb-3">
            <img src=image alt=title.clone()/>
            <div class="flex-grow-1">
                <div class="small fw-semibold">{title}</div>
                <div class="small text-muted">{unit_price}</div>
                <div class="btn-group btn-group-sm mt-1" role="group">
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        on:click=move |_| store.update_quantity(&dec_id, quantity - 1)
                    >
                        "−"
                    </button>
                    <span class="btn btn-outline-secondary disabled">{quantity}</span>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        on:click=move |_| store.update_quantity(&inc_id, quantity + 1)
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="text-end">
                <div class="fw-bold">{subtotal}</div>
                <button
                    type="button"
                    class="btn btn-link btn-sm text-danger p-0"
                    on:click=move |_| store.remove_from_cart(&id)
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
