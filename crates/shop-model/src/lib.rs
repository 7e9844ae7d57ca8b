//! Domain and wire types for the storefront client.
//!
//! # Module Organization
//!
//! - [`ids`]: Integer key newtypes (product, option value, variant)
//! - [`option`]: Option types (configuration axes) and option values
//! - [`selection`]: The user's selection set and its invalidating mutator
//! - [`availability`]: Server answer to an option selection query
//! - [`product`]: Catalog rendered by the product detail page
//! - [`cart`]: Cart action requests/responses and account payloads

pub mod availability;
pub mod cart;
pub mod ids;
pub mod option;
pub mod product;
pub mod selection;

pub use availability::{ProductVariantData, VariantAvailability};
pub use cart::{
    CartAction, CartRequest, CartResponse, DeactivationResponse, ServerErrorBody,
};
pub use ids::{OptionValueId, ProductId, ProductVariantId};
pub use option::{OptionType, OptionValue};
pub use product::{OptionGroup, OptionValueItem, ProductDetail};
pub use selection::{Selection, SelectionSet};
