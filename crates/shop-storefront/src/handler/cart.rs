//! Cart page handler.

use shop_model::{CartRequest, ProductVariantId};

use super::MessageHandler;
use crate::message::CartMessage;
use crate::state::{AppState, CartPageState, Notice};
use crate::task::{Effect, Task};

/// Handler for cart page messages.
pub struct CartHandler;

impl MessageHandler<CartMessage> for CartHandler {
    fn handle(&self, state: &mut AppState, msg: CartMessage) -> Task {
        match msg {
            CartMessage::PageLoaded(rows) => {
                state.cart = CartPageState::new(rows);
                Task::none()
            }

            CartMessage::QuantityEdited(id, quantity) => {
                if !state.cart.set_quantity(id, quantity) {
                    tracing::debug!("Ignoring edit of unknown cart row {}", id);
                }
                Task::none()
            }

            CartMessage::UpdateClicked(id) => match state.cart.row(id) {
                Some(row) => Task::effect(Effect::Cart {
                    request: CartRequest::update(id, row.quantity),
                    visit: None,
                }),
                None => {
                    tracing::debug!("Ignoring update of unknown cart row {}", id);
                    Task::none()
                }
            },

            CartMessage::DeleteClicked(id) => Task::effect(Effect::Cart {
                request: CartRequest::delete(id),
                visit: None,
            }),
        }
    }
}

/// Show the new cart quantity after a row update.
pub fn cart_item_updated(
    state: &mut AppState,
    product_variant_id: ProductVariantId,
    result: Result<u32, String>,
) -> Task {
    match result {
        Ok(cart_quantity) => {
            tracing::debug!(
                "Updated cart row {}; cart holds {} item(s)",
                product_variant_id,
                cart_quantity
            );
            state.cart_badge = Some(cart_quantity);
        }
        Err(message) => state.notify(Notice::error(message)),
    }
    Task::none()
}

/// Remove a deleted row and show the new cart quantity.
pub fn cart_item_deleted(
    state: &mut AppState,
    product_variant_id: ProductVariantId,
    result: Result<u32, String>,
) -> Task {
    match result {
        Ok(cart_quantity) => {
            state.cart.remove(product_variant_id, cart_quantity);
            state.cart_badge = Some(cart_quantity);
        }
        Err(message) => state.notify(Notice::error(message)),
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CartItemRow;

    fn loaded() -> AppState {
        let mut state = AppState::new();
        let _ = CartHandler.handle(
            &mut state,
            CartMessage::PageLoaded(vec![CartItemRow::new(5, 1), CartItemRow::new(6, 2)]),
        );
        state
    }

    #[test]
    fn test_update_sends_edited_quantity() {
        let mut state = loaded();
        let _ = CartHandler.handle(&mut state, CartMessage::QuantityEdited(ProductVariantId(6), 4));
        let task = CartHandler.handle(&mut state, CartMessage::UpdateClicked(ProductVariantId(6)));
        assert_eq!(
            task.effects(),
            [Effect::Cart {
                request: CartRequest::update(ProductVariantId(6), 4),
                visit: None,
            }]
        );
    }

    #[test]
    fn test_update_of_unknown_row_is_ignored() {
        let mut state = loaded();
        let task = CartHandler.handle(&mut state, CartMessage::UpdateClicked(ProductVariantId(9)));
        assert!(task.is_none());
    }

    #[test]
    fn test_failed_delete_keeps_row() {
        let mut state = loaded();
        let _ = cart_item_deleted(
            &mut state,
            ProductVariantId(5),
            Err("Product variant not in cart".to_string()),
        );
        assert_eq!(state.cart.rows.len(), 2);
        assert_eq!(
            state.notice,
            Some(Notice::error("Product variant not in cart"))
        );
        assert_eq!(state.cart_badge, None);
    }
}
