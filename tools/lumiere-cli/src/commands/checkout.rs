//! Cart building and order placement.

use anyhow::{bail, Context as _, Result};
use lumiere_commerce::cart::CheckoutSummary;
use lumiere_commerce::checkout::FormField;
use lumiere_commerce::{ProductId, Storefront, ValidationError};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let dry_run = args.dry_run || args.offline;
    let mut shop = ctx.storefront(args.offline).await?;

    for item in &args.items {
        let (id, quantity) = parse_item(item)?;
        for _ in 0..quantity {
            shop.add_to_cart(id)
                .with_context(|| format!("Cannot add product {} to the cart", id))?;
        }
    }

    let fields = [
        (FormField::Name, &args.name),
        (FormField::Email, &args.email),
        (FormField::Mobile, &args.mobile),
        (FormField::Address1, &args.address1),
        (FormField::Address2, &args.address2),
        (FormField::Pincode, &args.pincode),
    ];
    for (field, value) in fields {
        shop.set_form_field(field, value)?;
    }

    let summary = shop.summary()?;
    print_summary(&shop, &summary, ctx);

    if let Err(e) = shop.validate() {
        bail!("{}", validation_message(&e));
    }

    if dry_run {
        ctx.output.success("Order is ready to submit (dry run, nothing sent)");
        return Ok(());
    }

    let client = ctx.client()?;
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    ctx.output.info("Placing order...");
    let confirmation = shop
        .checkout_with_cancel(&client, &cancel)
        .await
        .context("Order was not placed")?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    match &confirmation.order_id {
        Some(id) => ctx.output.success(&format!("Order {} placed", id)),
        None => ctx.output.success("Order placed"),
    }
    ctx.output.kv("Charged", &confirmation.total.display());
    Ok(())
}

/// Parse `ID` or `ID:QTY`.
fn parse_item(raw: &str) -> Result<(ProductId, u32)> {
    let (id, quantity) = match raw.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (raw, "1"),
    };
    let id: i64 = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid product id in '{}'", raw))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{}'", raw))?;
    if quantity == 0 {
        bail!("Quantity must be at least 1 in '{}'", raw);
    }
    Ok((ProductId::new(id), quantity))
}

/// Validation error text, naming the empty fields by their labels.
fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingFields(fields) => {
            let names: Vec<&str> = fields.iter().map(FormField::display_name).collect();
            format!("{} (missing: {})", err, names.join(", "))
        }
        other => other.to_string(),
    }
}

fn print_summary(shop: &Storefront, summary: &CheckoutSummary, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": shop.cart().lines(),
            "summary": summary,
        }));
        return;
    }

    ctx.output.header("Cart");
    let widths = [28, 5, 12];
    ctx.output.table_row(&["ITEM", "QTY", "SUBTOTAL"], &widths);
    for line in shop.cart().lines() {
        let quantity = line.quantity.to_string();
        let subtotal = line
            .subtotal()
            .map(|m| m.display())
            .unwrap_or_else(|| "overflow".to_string());
        ctx.output
            .table_row(&[&line.name, &quantity, &subtotal], &widths);
    }

    ctx.output.kv("Subtotal", &summary.subtotal.display());
    match summary.shipping_zone.label() {
        Some(label) => ctx.output.kv(
            "Shipping",
            &format!("{} ({})", summary.shipping.display(), label),
        ),
        None => ctx.output.kv("Shipping", "Enter pincode"),
    }
    ctx.output.kv("Total", &summary.grand_total.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("3").unwrap(), (ProductId::new(3), 1));
        assert_eq!(parse_item("7:2").unwrap(), (ProductId::new(7), 2));
        assert_eq!(parse_item(" 9 : 4 ").unwrap(), (ProductId::new(9), 4));
    }

    #[test]
    fn test_validation_message_names_missing_fields() {
        let err = ValidationError::MissingFields(vec![FormField::Mobile, FormField::Pincode]);
        assert_eq!(
            validation_message(&err),
            "Please fill in all fields (missing: Mobile Number, Pin Code)"
        );
        assert_eq!(
            validation_message(&ValidationError::BadPincode),
            "Pin code must be 6 digits"
        );
    }

    #[test]
    fn test_parse_item_rejects_garbage() {
        assert!(parse_item("ring").is_err());
        assert!(parse_item("1:x").is_err());
        assert!(parse_item("1:0").is_err());
        assert!(parse_item("1:-2").is_err());
    }
}
