//! Order wire types for `POST /api/orders`.

use crate::cart::{Cart, CartLine, CheckoutSummary};
use crate::checkout::CheckoutForm;
use crate::error::{CartError, OrderSubmitError};
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Message used when the server refuses an order without saying why.
pub const DEFAULT_REJECTION: &str = "Failed to place order";

/// One purchased line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub quantity: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            category: line.category.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Body of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    pub customer: CheckoutForm,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

impl OrderRequest {
    /// Snapshot the cart and form into an order body.
    ///
    /// Totals are computed here so the request always agrees with its items.
    pub fn from_checkout(cart: &Cart, form: &CheckoutForm) -> Result<Self, CartError> {
        let summary = CheckoutSummary::compute(cart, &form.pincode)?;
        Ok(Self {
            customer: form.clone(),
            items: cart.lines().iter().map(OrderItem::from).collect(),
            subtotal: summary.subtotal,
            shipping_cost: summary.shipping,
            total: summary.grand_total,
        })
    }
}

/// Order object inside a successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub id: OrderId,
}

/// Body returned by the order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default)]
    pub order: Option<OrderReceipt>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrderResponse {
    /// Response for an accepted order.
    pub fn accepted(id: impl Into<String>) -> Self {
        Self {
            success: true,
            order: Some(OrderReceipt { id: OrderId::new(id) }),
            error: None,
        }
    }

    /// Response for a refused order.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            order: None,
            error: Some(message.into()),
        }
    }

    /// Interpret the response.
    ///
    /// A success without an order object still counts as success.
    pub fn into_result(self) -> Result<Option<OrderId>, OrderSubmitError> {
        if self.success {
            Ok(self.order.map(|o| o.id))
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            Err(OrderSubmitError::ServerRejected(message))
        }
    }
}

/// What the shopper sees after a successful order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: Option<OrderId>,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart() -> Cart {
        let stock = vec![
            Product::new(1, "Rings", "Band", Money::new(1000)).with_stock(3),
            Product::new(2, "Earrings", "Studs", Money::new(2500)).with_stock(1),
        ];
        let mut cart = Cart::new();
        cart.add(stock.as_slice(), ProductId::new(1)).unwrap();
        cart.add(stock.as_slice(), ProductId::new(1)).unwrap();
        cart.add(stock.as_slice(), ProductId::new(2)).unwrap();
        cart
    }

    #[test]
    fn test_request_from_checkout() {
        let form = CheckoutForm {
            pincode: "110001".to_string(),
            ..CheckoutForm::default()
        };
        let request = OrderRequest::from_checkout(&cart(), &form).unwrap();

        assert_eq!(request.items.len(), 2);
        let units: Vec<u32> = request.items.iter().map(|i| i.quantity).collect();
        assert_eq!(units, vec![2, 1]);
        assert_eq!(request.subtotal, Money::new(4500));
        assert_eq!(request.shipping_cost, Money::new(200));
        assert_eq!(request.total, Money::new(4700));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = OrderRequest::from_checkout(&cart(), &CheckoutForm::default()).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["shipping_cost"], 0);
        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][1]["category"], "Earrings");
        assert!(json["customer"].is_object());
    }

    #[test]
    fn test_response_success() {
        let response: OrderResponse =
            serde_json::from_str(r#"{"success": true, "order": {"id": "ORD-17"}}"#).unwrap();
        assert_eq!(response.into_result(), Ok(Some(OrderId::new("ORD-17"))));
    }

    #[test]
    fn test_response_success_without_order() {
        let response: OrderResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result(), Ok(None));
    }

    #[test]
    fn test_response_rejected() {
        let response: OrderResponse =
            serde_json::from_str(r#"{"success": false, "error": "Out of stock"}"#).unwrap();
        assert_eq!(
            response.into_result(),
            Err(OrderSubmitError::ServerRejected("Out of stock".to_string()))
        );
    }

    #[test]
    fn test_response_rejected_without_message() {
        let result = OrderResponse {
            success: false,
            order: None,
            error: None,
        }
        .into_result();
        assert_eq!(
            result,
            Err(OrderSubmitError::ServerRejected(DEFAULT_REJECTION.to_string()))
        );
    }
}
