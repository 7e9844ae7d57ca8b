//! Product detail page messages.

use shop_model::{OptionValueId, ProductDetail};

/// Messages for the product detail page.
#[derive(Debug, Clone)]
pub enum ProductMessage {
    /// A product page was rendered
    PageLoaded(ProductDetail),

    /// User navigated away from the product page
    PageClosed,

    /// User clicked an option value button
    OptionValueClicked(OptionValueId),

    /// User edited the quantity input
    QuantityChanged(u32),

    /// User clicked "Add to cart"
    AddToCartClicked,
}
