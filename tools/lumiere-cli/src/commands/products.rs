//! Product listing.

use anyhow::Result;
use lumiere_commerce::{Money, ProductId, CURRENCY_CODE};
use serde::Serialize;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct ProductRow {
    id: ProductId,
    name: String,
    category: String,
    price: Money,
    currency: &'static str,
    stock_quantity: u32,
    available: i64,
}

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront(args.offline).await?;

    if args.categories {
        let categories = shop.catalog().categories();
        if ctx.output.is_json() {
            ctx.output.json(&categories);
        } else {
            ctx.output.header("Categories");
            for category in &categories {
                ctx.output.kv("category", category);
            }
        }
        return Ok(());
    }

    if let Some(text) = args.search {
        shop.set_search_text(text);
    }
    if let Some(category) = args.category.as_deref() {
        shop.select_category(category);
    }

    let products = shop.visible_products();
    ctx.output.debug(&format!(
        "{} of {} products match",
        products.len(),
        shop.catalog().len()
    ));

    if ctx.output.is_json() {
        let rows: Vec<ProductRow> = products
            .iter()
            .map(|p| ProductRow {
                id: p.id,
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.price,
                currency: CURRENCY_CODE,
                stock_quantity: p.stock_quantity,
                available: shop.availability(p.id).available(),
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products match your search.");
        return Ok(());
    }

    ctx.output.header("Products");
    let widths = [4, 28, 12, 12, 16];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);

    let threshold = ctx.config.display.low_stock_threshold;
    for product in &products {
        let id = product.id.to_string();
        let price = product.price.display();
        let stock = stock_badge(&shop.availability(product.id), threshold);
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price, &stock],
            &widths,
        );
    }

    ctx.output.info(&format!("Showing {} product(s)", products.len()));
    Ok(())
}
