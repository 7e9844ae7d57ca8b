//! Product detail page handler.
//!
//! Handles:
//! - Page load and close
//! - Option value clicks (selection update, availability request)
//! - Quantity edits
//! - The add-to-cart gate and its result
//! - Availability results, discarding stale ones

use shop_model::{CartRequest, OptionValueId, VariantAvailability};

use super::MessageHandler;
use crate::message::ProductMessage;
use crate::state::{
    AppState, Generation, Notice, ProductSession, QUANTITY_REQUIRED, SELECT_ALL_OPTIONS,
};
use crate::task::{Effect, Task};

/// Handler for product page messages.
pub struct ProductHandler;

impl MessageHandler<ProductMessage> for ProductHandler {
    fn handle(&self, state: &mut AppState, msg: ProductMessage) -> Task {
        match msg {
            ProductMessage::PageLoaded(detail) => {
                tracing::debug!(
                    "Product page {} loaded with {} option type(s)",
                    detail.product_id,
                    detail.options.len()
                );
                let visit = state.generations.next();
                state.product = Some(ProductSession::new(&detail, visit));
                state.notice = None;
                Task::none()
            }

            ProductMessage::PageClosed => {
                state.product = None;
                Task::none()
            }

            ProductMessage::OptionValueClicked(id) => handle_option_value_clicked(state, id),

            ProductMessage::QuantityChanged(value) => {
                if let Some(session) = state.product.as_mut() {
                    let quantity = &mut session.page.quantity;
                    quantity.value = quantity.max.map_or(value, |max| value.min(max));
                }
                Task::none()
            }

            ProductMessage::AddToCartClicked => handle_add_to_cart_clicked(state),
        }
    }
}

fn handle_option_value_clicked(state: &mut AppState, id: OptionValueId) -> Task {
    let Some(session) = state.product.as_mut() else {
        tracing::debug!("Option value {} clicked without a product page", id);
        return Task::none();
    };

    let Some((option_type, button)) = session.page.button(id) else {
        tracing::debug!("Ignoring click on unknown option value {}", id);
        return Task::none();
    };
    if button.disabled {
        tracing::debug!("Ignoring click on disabled option value {}", id);
        return Task::none();
    }

    let option_type_name = option_type.name.clone();
    let value_name = button.value.name.clone();
    let position = option_type.position;

    let invalidated = session
        .selection
        .apply(&option_type_name, id, value_name, position);
    if !invalidated.is_empty() {
        tracing::debug!("Cleared selections for {}", invalidated.join(", "));
    }

    let generation = state.generations.next();
    session.latest_request = Some(generation);
    tracing::debug!(
        "Selected {}={} at position {} (request {})",
        option_type_name,
        id,
        position,
        generation
    );

    Task::effect(Effect::FetchAvailability {
        generation,
        position,
        product_id: session.page.product_id,
        selection: session.selection.clone(),
    })
}

fn handle_add_to_cart_clicked(state: &mut AppState) -> Task {
    let Some(session) = state.product.as_ref() else {
        return Task::none();
    };

    match session.page.add_to_cart.target() {
        Some(_) if session.page.quantity.value == 0 => {
            tracing::warn!("Add to cart refused: quantity is 0");
            state.notify(Notice::info(QUANTITY_REQUIRED));
            Task::none()
        }
        Some(variant) => Task::effect(Effect::Cart {
            request: CartRequest::add(variant, session.page.quantity.value),
            visit: Some(session.visit),
        }),
        None => {
            tracing::warn!(
                "Add to cart refused: {:?} variant(s) match the selection",
                session.page.add_to_cart.no_of_variants
            );
            state.notify(Notice::info(SELECT_ALL_OPTIONS));
            Task::none()
        }
    }
}

/// Apply an availability answer if it belongs to the latest request.
pub fn availability_loaded(
    state: &mut AppState,
    generation: Generation,
    position: u32,
    result: Result<VariantAvailability, String>,
) -> Task {
    let Some(session) = state.product.as_mut() else {
        tracing::debug!("Dropping availability {} for a closed page", generation);
        return Task::none();
    };
    if !session.is_latest(generation) {
        tracing::debug!("Dropping stale availability {}", generation);
        return Task::none();
    }

    match result {
        Ok(availability) => {
            session
                .page
                .reconcile(&availability, position, &session.selection);
        }
        Err(message) => state.notify(Notice::error(message)),
    }
    Task::none()
}

/// Update the badge after an add, and the local stock bound when the page
/// visit that sent it is still open.
pub fn cart_item_added(
    state: &mut AppState,
    visit: Option<Generation>,
    quantity: u32,
    result: Result<u32, String>,
) -> Task {
    match result {
        Ok(cart_quantity) => {
            tracing::debug!("Cart now holds {} item(s)", cart_quantity);
            state.cart_badge = Some(cart_quantity);
            match state.product.as_mut() {
                Some(session) if visit == Some(session.visit) => {
                    session.page.quantity.consume(quantity);
                }
                _ => tracing::debug!("Add finished after its page visit ended"),
            }
        }
        Err(message) => state.notify(Notice::error(message)),
    }
    Task::none()
}
