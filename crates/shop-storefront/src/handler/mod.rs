//! Message handlers.
//!
//! Each page has a handler implementing [`MessageHandler`] for its message
//! type. Result messages for requests a page issued are handled by free
//! functions in the same module, so everything a page does lives together.
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task {
//!     match message {
//!         Message::Product(msg) => ProductHandler.handle(&mut self.state, msg),
//!         Message::Cart(msg) => CartHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod account;
mod cart;
mod product;

pub use account::{AccountHandler, AdminHandler, DEACTIVATION_FAILED, account_deactivated};
pub use cart::{CartHandler, cart_item_deleted, cart_item_updated};
pub use product::{ProductHandler, availability_loaded, cart_item_added};

use crate::state::AppState;
use crate::task::Task;

/// Handles one message type against the application state.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning the requests to make.
    fn handle(&self, state: &mut AppState, msg: M) -> Task;
}
