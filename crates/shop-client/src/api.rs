//! The storefront server boundary.

use shop_model::{
    CartRequest, CartResponse, DeactivationResponse, ProductId, SelectionSet, VariantAvailability,
};

use crate::error::Result;

/// Operations the page controller performs against the storefront server.
///
/// [`HttpStorefront`](crate::HttpStorefront) is the production
/// implementation; tests substitute scripted in-memory implementations.
#[async_trait::async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Query the variants consistent with `selection` and the option values
    /// selectable at the next position.
    async fn option_value_selection(
        &self,
        product_id: ProductId,
        selection: &SelectionSet,
    ) -> Result<VariantAvailability>;

    /// Add, update or delete a cart item.
    async fn cart_action(&self, request: &CartRequest) -> Result<CartResponse>;

    /// Deactivate the signed-in customer account.
    async fn deactivate_account(&self) -> Result<DeactivationResponse>;
}
