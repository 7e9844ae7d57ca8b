//! Headless page controller for the storefront.
//!
//! This crate holds the state of the storefront pages and the logic that
//! reacts to user interactions:
//!
//! - product detail page: option selection, variant availability, the
//!   add-to-cart gate and option value images
//! - cart page: quantity updates and deletions
//! - account page: deactivation
//! - admin product form: section switching
//!
//! # Architecture
//!
//! - [`state`]: Page view models, mutated only by [`App::update`]
//! - [`message`]: User interactions and request results
//! - [`handler`]: Per-page message handlers
//! - [`task`]: Requests returned by `update` instead of performed by it
//! - [`runtime`]: [`Storefront`], which performs requests concurrently and
//!   feeds results back in completion order
//!
//! Availability requests are tagged with a [`state::Generation`]; answers to
//! superseded requests are discarded, so the page always reflects the most
//! recent selection.

pub mod app;
pub mod handler;
pub mod message;
pub mod runtime;
pub mod settings;
pub mod state;
pub mod task;

pub use app::App;
pub use message::{AccountMessage, AdminMessage, CartMessage, Message, ProductMessage};
pub use runtime::{Storefront, perform};
pub use settings::Settings;
pub use state::{AppState, Notice};
pub use task::{Effect, Task};
