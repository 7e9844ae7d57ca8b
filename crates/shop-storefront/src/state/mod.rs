//! Storefront state management.
//!
//! The state is split per page:
//!
//! - **AppState**: Root state, cart badge and notices
//! - **ProductPageState**: Option buttons, quantity, add-to-cart and images
//! - **CartPageState**: Cart rows and empty/summary layout
//! - **AccountState**: Deactivation redirect
//! - **AdminSections**: Admin product form sections

mod account;
mod admin;
mod app_state;
mod cart_page;
mod generation;
mod notice;
mod product_page;

pub use account::AccountState;
pub use admin::{AdminSections, GENERAL_SECTION, VARIANTS_SECTION};
pub use app_state::AppState;
pub use cart_page::{CartItemRow, CartPageState};
pub use generation::{Generation, RequestGeneration};
pub use notice::Notice;
pub use product_page::{
    AddToCartButton, ImagePanel, OptionButton, OptionGroupView, ProductPageState, ProductSession,
    QUANTITY_REQUIRED, QuantityInput, SELECT_ALL_OPTIONS, VariantStatus,
};
