//! Shipping quote.

use anyhow::Result;
use lumiere_commerce::checkout::{ShippingZone, PINCODE_LEN};
use serde_json::json;

use super::ShippingArgs;
use crate::context::Context;

/// Run the shipping command.
pub async fn run(args: ShippingArgs, ctx: &Context) -> Result<()> {
    let zone = ShippingZone::for_pincode(&args.pincode);
    let fee = zone.fee();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "pincode": args.pincode,
            "zone": zone.as_str(),
            "fee": fee,
        }));
        return Ok(());
    }

    match zone.label() {
        Some(label) => {
            ctx.output.kv("Shipping", &fee.display());
            ctx.output.kv("Destination", label);
        }
        None => ctx
            .output
            .warn(&format!("Enter a {}-digit pincode to see shipping", PINCODE_LEN)),
    }
    Ok(())
}
