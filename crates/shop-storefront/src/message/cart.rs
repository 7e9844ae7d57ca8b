//! Cart page messages.

use shop_model::ProductVariantId;

use crate::state::CartItemRow;

/// Messages for the cart page.
#[derive(Debug, Clone)]
pub enum CartMessage {
    /// The cart page was rendered with these rows
    PageLoaded(Vec<CartItemRow>),

    /// User edited a row's quantity input
    QuantityEdited(ProductVariantId, u32),

    /// User clicked a row's update button
    UpdateClicked(ProductVariantId),

    /// User clicked a row's delete button
    DeleteClicked(ProductVariantId),
}
