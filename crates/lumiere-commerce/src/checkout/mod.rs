//! Checkout module.
//!
//! Contains the checkout form, its validator, shipping fees, order wire
//! types and the submission state machine.

mod form;
mod order;
mod shipping;
mod submission;
mod validate;

pub use form::{digits_only, CheckoutForm, FormField, MOBILE_LEN};
pub use order::{
    OrderConfirmation, OrderItem, OrderReceipt, OrderRequest, OrderResponse, DEFAULT_REJECTION,
};
pub use shipping::{
    shipping_tier, ShippingZone, METRO_FEE, METRO_PREFIXES, NON_METRO_FEE, PINCODE_LEN,
};
pub use submission::{OrderSubmitter, SubmissionState};
pub use validate::validate_checkout;
