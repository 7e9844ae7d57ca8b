//! Message hierarchy of the storefront controller.
//!
//! User interactions arrive as page messages; completed requests come back
//! as result messages carrying `Result<T, String>`.

pub mod account;
pub mod cart;
pub mod product;

use shop_model::{ProductVariantId, VariantAvailability};

use crate::state::Generation;

pub use account::{AccountMessage, AdminMessage};
pub use cart::CartMessage;
pub use product::ProductMessage;

/// Root message enum for the storefront.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Page messages
    // =========================================================================
    /// Product detail page messages
    Product(ProductMessage),

    /// Cart page messages
    Cart(CartMessage),

    /// Account settings page messages
    Account(AccountMessage),

    /// Admin product form messages
    Admin(AdminMessage),

    // =========================================================================
    // Request results
    // =========================================================================
    /// Availability answer for the selection made at `position`
    AvailabilityLoaded {
        generation: Generation,
        position: u32,
        result: Result<VariantAvailability, String>,
    },

    /// Add-to-cart finished; `quantity` is the amount that was sent from
    /// page visit `visit`
    CartItemAdded {
        visit: Option<Generation>,
        quantity: u32,
        result: Result<u32, String>,
    },

    /// Cart row update finished with the new cart quantity
    CartItemUpdated {
        product_variant_id: ProductVariantId,
        result: Result<u32, String>,
    },

    /// Cart row delete finished with the new cart quantity
    CartItemDeleted {
        product_variant_id: ProductVariantId,
        result: Result<u32, String>,
    },

    /// Deactivation finished with the redirect target
    AccountDeactivated(Result<String, String>),
}
