//! Catalog listing command.

use anyhow::Result;
use shop_commerce::prelude::*;

use super::{load_catalog, CatalogArgs};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 5] = [4, 18, 10, 12, 48];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(ctx).await?;
    let products = filter_by_category(catalog.products(), args.category.as_deref());

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        match args.category {
            Some(category) => {
                ctx.output.info(&format!("No products in category '{}'.", category));
                ctx.output.info(&format!("Categories: {}", catalog.categories().join(", ")));
            }
            None => ctx.output.info("The catalog is empty."),
        }
        return Ok(());
    }

    let symbol = &ctx.config.display.currency_symbol;
    ctx.output.header("Catalog");
    ctx.output
        .table_header(&["ID", "CATEGORY", "PRICE", "RATING", "TITLE"], &WIDTHS);
    for product in &products {
        let category = truncate(&product.category, WIDTHS[1]);
        let price = product.price.display_with(symbol);
        let rating = product
            .rating
            .as_ref()
            .map(Rating::summary)
            .unwrap_or_else(|| "-".to_string());
        let title = truncate(&product.title, WIDTHS[4]);

        ctx.output.table_row(
            &[
                product.id.as_str(),
                category.as_str(),
                price.as_str(),
                rating.as_str(),
                title.as_str(),
            ],
            &WIDTHS,
        );
    }
    ctx.output.info(&format!("{} product(s)", products.len()));

    Ok(())
}

fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category.eq_ignore_ascii_case(c.trim())))
        .collect()
}
