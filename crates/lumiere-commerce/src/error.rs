//! Storefront error types.

use crate::checkout::FormField;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised while loading data from the remote storefront API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Non-2xx HTTP response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request did not complete in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body did not have the expected shape.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Any other request failure.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::InvalidPayload(e.to_string())
    }
}

/// Errors raised by cart mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Not enough stock left to add the requested units.
    #[error("Out of stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: i64,
    },

    /// No cart line exists for the product.
    #[error("Item not in cart: {0}")]
    NotFound(ProductId),

    /// Arithmetic overflow while computing quantities or totals.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

impl CartError {
    /// Whether this is a stock refusal.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

/// Reasons a checkout attempt is refused before anything is sent.
///
/// The variants are checked in declaration order and only the first
/// failure is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please fill in all fields")]
    MissingFields(Vec<FormField>),

    #[error("Mobile number must be 10 digits")]
    BadMobile,

    #[error("Pin code must be 6 digits")]
    BadPincode,
}

/// Failure of an order that was handed to the remote API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderSubmitError {
    /// The server answered and refused the order.
    #[error("Order rejected: {0}")]
    ServerRejected(String),

    /// The server could not be reached or answered with garbage.
    #[error("Could not reach the server: {0}")]
    TransportFailure(String),

    /// The in-flight submission was cancelled locally.
    #[error("Order submission cancelled")]
    Cancelled,
}

impl OrderSubmitError {
    /// Whether the server itself refused the order.
    pub fn is_server_rejection(&self) -> bool {
        matches!(self, OrderSubmitError::ServerRejected(_))
    }
}

/// Errors returned from a checkout attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Submit(#[from] OrderSubmitError),

    /// Another order is still in flight.
    #[error("An order is already being submitted")]
    AlreadySubmitting,

    /// Invalid order submission state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}
