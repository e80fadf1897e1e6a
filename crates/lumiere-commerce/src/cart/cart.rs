//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::{Availability, CatalogStore, Product};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where the cart looks up products and their stock.
pub trait StockSource {
    /// Look up a product.
    fn product(&self, id: ProductId) -> Option<&Product>;

    /// Stock on hand; zero for unknown ids.
    fn stock_of(&self, id: ProductId) -> u32 {
        self.product(id).map_or(0, |p| p.stock_quantity)
    }
}

impl StockSource for CatalogStore {
    fn product(&self, id: ProductId) -> Option<&Product> {
        CatalogStore::product(self, id)
    }
}

impl StockSource for [Product] {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }
}

/// A line in the cart.
///
/// Name, category and price are snapshots taken when the line was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Product category at add time.
    pub category: String,
    /// Unit price at add time.
    pub price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// The shopping cart.
///
/// A line never sits at quantity zero, and no mutation can leave a line
/// holding more units than the stock source reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Units of a product in the cart; zero when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map_or(0, |l| l.quantity)
    }

    /// Stock versus cart for a product.
    pub fn availability<S: StockSource + ?Sized>(&self, stock: &S, id: ProductId) -> Availability {
        Availability::new(stock.stock_of(id), self.quantity_of(id))
    }

    /// Add one unit of a product, creating the line if needed.
    ///
    /// Returns the new quantity. Fails with `OutOfStock` when nothing is
    /// left to add, including for products the stock source doesn't know.
    pub fn add<S: StockSource + ?Sized>(&mut self, stock: &S, id: ProductId) -> Result<u32, CartError> {
        let availability = self.availability(stock, id);
        if !availability.can_add() {
            warn!(product_id = %id, available = availability.available(), "add refused, out of stock");
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: 1,
                available: availability.available(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.checked_add(1).ok_or(CartError::Overflow)?;
            debug!(product_id = %id, quantity = line.quantity, "cart line incremented");
            return Ok(line.quantity);
        }

        // can_add() implies the product exists with stock > 0
        let product = stock.product(id).ok_or(CartError::OutOfStock {
            product_id: id,
            requested: 1,
            available: 0,
        })?;
        self.lines.push(CartLine::from_product(product));
        debug!(product_id = %id, "cart line created");
        Ok(1)
    }

    /// Change the quantity of an existing line by `delta`.
    ///
    /// Returns the new quantity, or 0 when the line was removed. Positive
    /// deltas are checked against current availability before anything
    /// changes; negative deltas always succeed.
    pub fn change_quantity<S: StockSource + ?Sized>(
        &mut self,
        stock: &S,
        id: ProductId,
        delta: i32,
    ) -> Result<u32, CartError> {
        let current = self.line(id).ok_or(CartError::NotFound(id))?.quantity;

        if delta > 0 {
            let requested = delta.unsigned_abs();
            let availability = self.availability(stock, id);
            if !availability.can_add_units(requested) {
                warn!(product_id = %id, requested, available = availability.available(), "increase refused, out of stock");
                return Err(CartError::OutOfStock {
                    product_id: id,
                    requested,
                    available: availability.available(),
                });
            }
        }

        let next = i64::from(current) + i64::from(delta);
        if next <= 0 {
            self.remove(id);
            return Ok(0);
        }

        let next = u32::try_from(next).map_err(|_| CartError::Overflow)?;
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = next;
        }
        debug!(product_id = %id, quantity = next, "cart quantity changed");
        Ok(next)
    }

    /// Remove a product's line. Removing an absent line is a no-op.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id = %id, "cart line removed");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Subtotal and unit count, recomputed from the current lines.
    pub fn totals(&self) -> Result<CartTotals, CartError> {
        let mut subtotal = Money::zero();
        let mut count: u32 = 0;
        for line in &self.lines {
            let line_total = line.subtotal().ok_or(CartError::Overflow)?;
            subtotal = subtotal.try_add(&line_total).ok_or(CartError::Overflow)?;
            count = count.checked_add(line.quantity).ok_or(CartError::Overflow)?;
        }
        Ok(CartTotals { subtotal, count })
    }
}
