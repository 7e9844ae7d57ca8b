//! Effect execution.
//!
//! [`Storefront`] owns the [`App`] and performs the effects its updates
//! return on the tokio runtime. Completed requests are fed back through
//! `update` in completion order, so responses can overtake each other the
//! way they do in a browser.

use std::sync::Arc;

use shop_client::{ClientError, StorefrontApi};
use shop_model::CartAction;
use tokio::task::JoinSet;

use crate::app::App;
use crate::message::Message;
use crate::state::AppState;
use crate::task::{Effect, Task};

/// A running storefront session.
///
/// Must be driven from within a tokio runtime. State is only mutated on the
/// task that owns the `Storefront`.
pub struct Storefront {
    app: App,
    api: Arc<dyn StorefrontApi>,
    in_flight: JoinSet<Message>,
}

impl Storefront {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self {
            app: App::new(),
            api,
            in_flight: JoinSet::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.app.state
    }

    /// Number of requests not yet completed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Process a message and start the requests it triggers.
    pub fn dispatch(&mut self, message: Message) {
        let task = self.app.update(message);
        self.spawn(task);
    }

    fn spawn(&mut self, task: Task) {
        for effect in task.into_effects() {
            let api = Arc::clone(&self.api);
            self.in_flight.spawn(perform(api, effect));
        }
    }

    /// Wait for the next request to complete and apply its result.
    ///
    /// Returns `false` once nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        let Some(joined) = self.in_flight.join_next().await else {
            return false;
        };
        match joined {
            Ok(message) => self.dispatch(message),
            Err(e) => tracing::error!("Request task failed: {}", e),
        }
        true
    }

    /// Apply every in-flight request, including ones started by results.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }
}

/// Perform one effect and wrap its outcome in a result message.
pub async fn perform(api: Arc<dyn StorefrontApi>, effect: Effect) -> Message {
    match effect {
        Effect::FetchAvailability {
            generation,
            position,
            product_id,
            selection,
        } => {
            let result = api
                .option_value_selection(product_id, &selection)
                .await
                .map_err(|e| failure("option value selection", &e));
            Message::AvailabilityLoaded {
                generation,
                position,
                result,
            }
        }

        Effect::Cart { request, visit } => {
            let result = api
                .cart_action(&request)
                .await
                .map(|response| response.cart_quantity)
                .map_err(|e| failure(request.action.as_str(), &e));
            let product_variant_id = request.product_variant_id;
            match request.action {
                CartAction::AddCartItem => Message::CartItemAdded {
                    visit,
                    quantity: request.item_quantity.unwrap_or_default(),
                    result,
                },
                CartAction::UpdateCartItem => Message::CartItemUpdated {
                    product_variant_id,
                    result,
                },
                CartAction::DeleteCartItem => Message::CartItemDeleted {
                    product_variant_id,
                    result,
                },
            }
        }

        Effect::DeactivateAccount => {
            let result = api
                .deactivate_account()
                .await
                .map(|response| response.next_url)
                .map_err(|e| failure("account deactivation", &e));
            Message::AccountDeactivated(result)
        }
    }
}

fn failure(what: &str, error: &ClientError) -> String {
    tracing::warn!("{} failed: {}", what, error);
    error.user_message().to_string()
}
