//! The storefront controller.
//!
//! The architecture follows the Elm pattern: State → Message → Update.
//! All state changes happen in [`App::update`]; requests leave as a
//! [`Task`] and come back as result messages.

use crate::handler::{
    AccountHandler, AdminHandler, CartHandler, MessageHandler, ProductHandler,
    account_deactivated, availability_loaded, cart_item_added, cart_item_deleted,
    cart_item_updated,
};
use crate::message::Message;
use crate::state::AppState;
use crate::task::Task;

/// Controller owning all page state.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one message and return the requests it triggers.
    pub fn update(&mut self, message: Message) -> Task {
        match message {
            Message::Product(msg) => ProductHandler.handle(&mut self.state, msg),
            Message::Cart(msg) => CartHandler.handle(&mut self.state, msg),
            Message::Account(msg) => AccountHandler.handle(&mut self.state, msg),
            Message::Admin(msg) => AdminHandler.handle(&mut self.state, msg),

            Message::AvailabilityLoaded {
                generation,
                position,
                result,
            } => availability_loaded(&mut self.state, generation, position, result),

            Message::CartItemAdded {
                visit,
                quantity,
                result,
            } => cart_item_added(&mut self.state, visit, quantity, result),

            Message::CartItemUpdated {
                product_variant_id,
                result,
            } => cart_item_updated(&mut self.state, product_variant_id, result),

            Message::CartItemDeleted {
                product_variant_id,
                result,
            } => cart_item_deleted(&mut self.state, product_variant_id, result),

            Message::AccountDeactivated(result) => account_deactivated(&mut self.state, result),
        }
    }
}
