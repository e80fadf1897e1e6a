//! The storefront session: catalog, cart, checkout form and order
//! submitter behind one owner.
//!
//! Every mutation goes through `&mut self`, so at most one order can be in
//! flight per session.

use crate::api::StorefrontApi;
use crate::cart::{Cart, CheckoutSummary};
use crate::catalog::{Availability, CatalogStore, Product};
use crate::checkout::{
    validate_checkout, CheckoutForm, FormField, OrderConfirmation, OrderRequest, OrderSubmitter,
    SubmissionState,
};
use crate::error::{CartError, CheckoutError, FetchError, OrderSubmitError, ValidationError};
use crate::ids::{OrderId, ProductId};
use crate::search::{CategoryFilter, SearchQuery};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Default bound on how long an order submission may take.
pub const DEFAULT_ORDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Tunables for order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutPolicy {
    /// Submissions without an answer after this long fail as transport errors.
    pub order_timeout: Duration,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            order_timeout: DEFAULT_ORDER_TIMEOUT,
        }
    }
}

/// One shopper's session.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: CatalogStore,
    cart: Cart,
    form: CheckoutForm,
    submitter: OrderSubmitter,
    policy: CheckoutPolicy,
    query: SearchQuery,
}

/// Resets a submitter stuck in `Submitting` when the checkout future is
/// dropped before an outcome is recorded.
struct InFlight<'a> {
    submitter: &'a mut OrderSubmitter,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.submitter.is_submitting() {
            warn!("order submission dropped while in flight");
            self.submitter.cancel();
        }
    }
}

impl Storefront {
    /// Create a session with an empty catalog.
    pub fn new(policy: CheckoutPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Create a session over an already populated catalog.
    pub fn with_catalog(catalog: CatalogStore, policy: CheckoutPolicy) -> Self {
        Self {
            catalog,
            policy,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.submitter.state()
    }

    /// Check if an order is in flight (form and submit locked).
    pub fn is_submitting(&self) -> bool {
        self.submitter.is_submitting()
    }

    // ---- Catalog ----

    /// Fetch the product list. Returns the number of products held.
    pub async fn load_catalog(&mut self, api: &dyn StorefrontApi) -> Result<usize, FetchError> {
        self.catalog.load(api).await.map(|products| products.len())
    }

    /// Stock versus cart for a product.
    pub fn availability(&self, id: ProductId) -> Availability {
        self.cart.availability(&self.catalog, id)
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Select a category by its label; `"All"` clears the filter.
    pub fn select_category(&mut self, label: &str) {
        self.query.category = CategoryFilter::from_label(label);
    }

    /// Products matching the current search and category.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.search(&self.query)
    }

    // ---- Cart ----

    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32, CartError> {
        self.cart.add(&self.catalog, id)
    }

    pub fn change_quantity(&mut self, id: ProductId, delta: i32) -> Result<u32, CartError> {
        self.cart.change_quantity(&self.catalog, id, delta)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Totals and shipping for the current cart and pincode.
    pub fn summary(&self) -> Result<CheckoutSummary, CartError> {
        CheckoutSummary::compute(&self.cart, &self.form.pincode)
    }

    // ---- Checkout ----

    /// Mutable access to the form; `None` while an order is in flight.
    pub fn form_mut(&mut self) -> Option<&mut CheckoutForm> {
        if self.submitter.is_submitting() {
            None
        } else {
            Some(&mut self.form)
        }
    }

    /// Store raw input for a form field.
    pub fn set_form_field(&mut self, field: FormField, input: &str) -> Result<(), CheckoutError> {
        let form = self.form_mut().ok_or(CheckoutError::AlreadySubmitting)?;
        form.set_field(field, input);
        Ok(())
    }

    /// Close the checkout without ordering; the form is emptied, the cart kept.
    pub fn discard_checkout(&mut self) {
        if let Some(form) = self.form_mut() {
            form.reset();
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_checkout(&self.cart, &self.form)
    }

    /// Validate, submit and settle an order.
    pub async fn checkout(
        &mut self,
        api: &dyn StorefrontApi,
    ) -> Result<OrderConfirmation, CheckoutError> {
        self.checkout_with_cancel(api, &CancellationToken::new()).await
    }

    /// Like [`checkout`](Self::checkout), abandoning the request when
    /// `cancel` fires.
    ///
    /// On success the cart and form are emptied and the catalog refreshed.
    /// On any failure they are left untouched. Either way the submitter is
    /// back to `Idle` when this returns.
    pub async fn checkout_with_cancel(
        &mut self,
        api: &dyn StorefrontApi,
        cancel: &CancellationToken,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if self.submitter.is_submitting() {
            return Err(CheckoutError::AlreadySubmitting);
        }
        self.validate()?;
        let request = OrderRequest::from_checkout(&self.cart, &self.form)?;
        let timeout = self.policy.order_timeout;

        self.submitter.begin()?;
        let guard = InFlight {
            submitter: &mut self.submitter,
        };
        info!(items = request.items.len(), total = %request.total, "submitting order");
        let outcome = send_order(api, &request, timeout, cancel).await;

        match outcome {
            Ok(order_id) => {
                let confirmation = OrderConfirmation {
                    order_id,
                    total: request.total,
                };
                guard.submitter.succeed(confirmation.clone())?;
                drop(guard);

                match &confirmation.order_id {
                    Some(id) => info!(order_id = %id, total = %confirmation.total, "order placed"),
                    None => info!(total = %confirmation.total, "order placed without an id"),
                }
                self.cart.clear();
                self.form.reset();
                self.refresh_after_order(api, timeout, cancel).await;
                self.submitter.acknowledge();
                Ok(confirmation)
            }
            Err(e) => {
                guard.submitter.fail(e.clone())?;
                drop(guard);

                warn!(error = %e, "order failed");
                self.submitter.acknowledge();
                Err(CheckoutError::Submit(e))
            }
        }
    }

    /// Reload stock after an accepted order. If the reload does not finish,
    /// the previous catalog is kept and the order still stands.
    async fn refresh_after_order(
        &mut self,
        api: &dyn StorefrontApi,
        timeout: Duration,
        cancel: &CancellationToken,
    ) {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("catalog refresh after order cancelled");
            }
            refreshed = tokio::time::timeout(timeout, self.catalog.load(api)) => match refreshed {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => warn!(error = %e, "catalog refresh after order failed"),
                Err(_) => warn!(
                    "catalog refresh after order timed out after {}s",
                    timeout.as_secs()
                ),
            },
        }
    }
}

/// Send the order, bounded by `timeout` and `cancel`.
async fn send_order(
    api: &dyn StorefrontApi,
    request: &OrderRequest,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Option<OrderId>, OrderSubmitError> {
    let answered = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(OrderSubmitError::Cancelled),
        answered = tokio::time::timeout(timeout, api.place_order(request)) => answered,
    };

    match answered {
        Err(_) => Err(OrderSubmitError::TransportFailure(format!(
            "no response within {}s",
            timeout.as_secs()
        ))),
        Ok(Err(e)) => Err(OrderSubmitError::TransportFailure(e.to_string())),
        Ok(Ok(response)) => response.into_result(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn storefront() -> Storefront {
        let catalog = CatalogStore::from_products(vec![
            Product::new(1, "Rings", "Band", Money::new(1000)).with_stock(2),
            Product::new(2, "Earrings", "Pearl Hoops", Money::new(2500)).with_stock(1),
        ]);
        Storefront::with_catalog(catalog, CheckoutPolicy::default())
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(
            CheckoutPolicy::default().order_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_add_reads_catalog_stock() {
        let mut shop = storefront();
        let id = ProductId::new(1);

        assert_eq!(shop.add_to_cart(id).unwrap(), 1);
        assert_eq!(shop.availability(id).available(), 1);
        assert_eq!(shop.add_to_cart(id).unwrap(), 2);
        assert!(shop.add_to_cart(id).unwrap_err().is_out_of_stock());
        assert!(shop.availability(id).is_out_of_stock());
    }

    #[test]
    fn test_summary_uses_form_pincode() {
        let mut shop = storefront();
        shop.add_to_cart(ProductId::new(2)).unwrap();
        shop.set_form_field(FormField::Pincode, "700 091").unwrap();

        let summary = shop.summary().unwrap();
        assert_eq!(summary.subtotal, Money::new(2500));
        assert_eq!(summary.shipping, Money::new(200));
        assert_eq!(summary.grand_total, Money::new(2700));
    }

    #[test]
    fn test_visible_products_follow_query() {
        let mut shop = storefront();
        assert_eq!(shop.visible_products().len(), 2);

        shop.set_search_text("pearl");
        assert_eq!(shop.visible_products().len(), 1);

        shop.set_search_text("");
        shop.select_category("Rings");
        assert_eq!(shop.visible_products()[0].name, "Band");

        shop.select_category("All");
        assert_eq!(shop.visible_products().len(), 2);
    }

    #[test]
    fn test_discard_checkout_keeps_cart() {
        let mut shop = storefront();
        shop.add_to_cart(ProductId::new(1)).unwrap();
        shop.set_form_field(FormField::Name, "Asha").unwrap();

        shop.discard_checkout();
        assert!(shop.form().is_blank());
        assert_eq!(shop.cart().quantity_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_validate_empty_cart() {
        assert_eq!(storefront().validate(), Err(ValidationError::EmptyCart));
    }
}
