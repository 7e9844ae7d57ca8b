//! HTTP boundary of the storefront client.
//!
//! This crate talks to the storefront server on behalf of the page
//! controller:
//!
//! - option value selection (variant availability for a selection set)
//! - cart actions (add, update, delete) with CSRF protection
//! - customer account deactivation
//!
//! # Architecture
//!
//! The [`StorefrontApi`] trait is the seam between the page controller and
//! the network. [`HttpStorefront`] implements it with reqwest, retrying
//! transient failures per [`RetryPolicy`] and mapping refusals to
//! [`ClientError::Server`] with the server's own message.
//!
//! # Example
//!
//! ```no_run
//! use shop_client::{ClientSettings, HttpStorefront, StorefrontApi};
//! use shop_model::{OptionValueId, ProductId, SelectionSet};
//!
//! async fn query() -> shop_client::Result<()> {
//!     let client = HttpStorefront::new(ClientSettings::with_base_url("https://shop.example.com/"))?;
//!
//!     let mut selection = SelectionSet::new();
//!     selection.apply("Color", OptionValueId(3), "Red", 0);
//!
//!     let availability = client.option_value_selection(ProductId(7), &selection).await?;
//!     println!("{} matching variant(s)", availability.variant_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod csrf;
pub mod error;
pub mod http;
pub mod retry;

pub use api::StorefrontApi;
pub use config::{ClientSettings, Endpoints, RetryPolicy};
pub use csrf::{CsrfToken, cookie_value};
pub use error::{ClientError, Result};
pub use http::HttpStorefront;
pub use retry::with_retry;
