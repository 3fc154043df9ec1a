//! Cart building command.

use anyhow::Result;
use serde_json::json;
use shop_commerce::prelude::*;

use super::{load_catalog, CartArgs};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 5] = [4, 40, 10, 4, 10];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(ctx).await?;

    let mut cart = Cart::new();
    for warning in apply(&mut cart, &catalog, &args) {
        ctx.output.warn(&warning);
    }

    let symbol = &ctx.config.display.currency_symbol;
    if ctx.output.is_json() {
        let lines: Vec<_> = cart
            .lines()
            .iter()
            .map(|line| {
                json!({
                    "id": line.id(),
                    "title": line.product.title,
                    "price": line.product.price,
                    "quantity": line.quantity,
                    "subtotal": line.subtotal().rounded(),
                })
            })
            .collect();
        ctx.output.json(&json!({
            "lines": lines,
            "count": cart.cart_count(),
            "subtotal": cart.cart_total().rounded(),
        }));
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Add products with `shop cart --add <ID>`.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output
        .table_header(&["ID", "TITLE", "PRICE", "QTY", "SUBTOTAL"], &WIDTHS);
    for line in cart.lines() {
        let title = truncate(&line.product.title, WIDTHS[1]);
        let price = line.product.price.display_with(symbol);
        let quantity = line.quantity.to_string();
        let subtotal = line.subtotal().display_with(symbol);

        ctx.output.table_row(
            &[
                line.id().as_str(),
                title.as_str(),
                price.as_str(),
                quantity.as_str(),
                subtotal.as_str(),
            ],
            &WIDTHS,
        );
    }

    println!();
    ctx.output.kv("Items", &cart.cart_count().to_string());
    ctx.output.kv("Subtotal", &cart.cart_total().display_with(symbol));

    Ok(())
}

/// Apply adds, then sets, then removes. Returns warnings for ids that could
/// not be added because the catalog does not list them.
fn apply(cart: &mut Cart, catalog: &Catalog, args: &CartArgs) -> Vec<String> {
    let mut warnings = Vec::new();

    for id in &args.add {
        match catalog.find(id) {
            Some(product) => {
                cart.add_to_cart(product);
            }
            None => warnings.push(format!("No product with id '{}' in the catalog", id)),
        }
    }

    for (id, quantity) in &args.set {
        if !cart.update_quantity(id, *quantity) {
            tracing::debug!(%id, "set ignored, product not in cart");
        }
    }

    for id in &args.remove {
        if !cart.remove_from_cart(id) {
            tracing::debug!(%id, "remove ignored, product not in cart");
        }
    }

    warnings
}
