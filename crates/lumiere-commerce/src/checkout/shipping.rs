//! Shipping fee calculation.
//!
//! The fee depends only on the first three digits of the 6-digit pincode:
//! a fixed set of metro prefixes ships cheaper than everywhere else.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Length of a complete pincode.
pub const PINCODE_LEN: usize = 6;

/// Pincode prefixes served at the metro rate.
pub const METRO_PREFIXES: [&str; 5] = ["400", "110", "560", "600", "700"];

/// Fee for metro prefixes.
pub const METRO_FEE: Money = Money::new(200);

/// Fee for every other complete pincode.
pub const NON_METRO_FEE: Money = Money::new(500);

/// Shipping zone of a pincode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingZone {
    /// Pincode incomplete or malformed; fee not known yet.
    #[default]
    Undetermined,
    /// Metro prefix.
    Metro,
    /// Any other complete pincode.
    NonMetro,
}

impl ShippingZone {
    /// Classify a pincode. Anything but exactly six ASCII digits is
    /// `Undetermined`.
    pub fn for_pincode(pincode: &str) -> Self {
        if pincode.len() != PINCODE_LEN || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return ShippingZone::Undetermined;
        }
        let prefix = &pincode[..3];
        if METRO_PREFIXES.contains(&prefix) {
            ShippingZone::Metro
        } else {
            ShippingZone::NonMetro
        }
    }

    /// Fee for this zone. `Undetermined` is zero, meaning "unknown", not free.
    pub fn fee(&self) -> Money {
        match self {
            ShippingZone::Undetermined => Money::zero(),
            ShippingZone::Metro => METRO_FEE,
            ShippingZone::NonMetro => NON_METRO_FEE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingZone::Undetermined => "undetermined",
            ShippingZone::Metro => "metro",
            ShippingZone::NonMetro => "non_metro",
        }
    }

    /// Destination label shown next to the fee.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ShippingZone::Undetermined => None,
            ShippingZone::Metro => Some("metro city"),
            ShippingZone::NonMetro => Some("non-metro area"),
        }
    }
}

/// Shipping fee for a pincode; zero while it is not a complete pincode.
pub fn shipping_tier(pincode: &str) -> Money {
    ShippingZone::for_pincode(pincode).fee()
}
