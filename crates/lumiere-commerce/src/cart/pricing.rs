//! Cart and checkout totals.

use crate::cart::Cart;
use crate::checkout::ShippingZone;
use crate::error::CartError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal and unit count of a cart.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of price times quantity over all lines.
    pub subtotal: Money,
    /// Sum of quantities over all lines.
    pub count: u32,
}

/// Complete pricing breakdown shown at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Cart subtotal.
    pub subtotal: Money,
    /// Units in the cart.
    pub count: u32,
    /// Shipping zone derived from the pincode.
    pub shipping_zone: ShippingZone,
    /// Shipping fee; zero while the pincode is incomplete.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl CheckoutSummary {
    /// Compute the summary for a cart shipped to `pincode`.
    pub fn compute(cart: &Cart, pincode: &str) -> Result<Self, CartError> {
        let totals = cart.totals()?;
        let shipping_zone = ShippingZone::for_pincode(pincode);
        let shipping = shipping_zone.fee();
        let grand_total = totals
            .subtotal
            .try_add(&shipping)
            .ok_or(CartError::Overflow)?;

        Ok(Self {
            subtotal: totals.subtotal,
            count: totals.count,
            shipping_zone,
            shipping,
            grand_total,
        })
    }

    /// Check if the shipping fee is known yet.
    pub fn is_shipping_determined(&self) -> bool {
        self.shipping_zone != ShippingZone::Undetermined
    }
}
