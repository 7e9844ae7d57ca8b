//! Effects requested by the controller.
//!
//! `update` never performs I/O. It returns a [`Task`] listing the requests
//! to make; the runtime performs them and feeds the results back as
//! messages.

use shop_model::{CartRequest, ProductId, SelectionSet};

use crate::state::Generation;

/// One request to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Query variants matching `selection`, a snapshot taken after the
    /// selection was updated.
    FetchAvailability {
        generation: Generation,
        position: u32,
        product_id: ProductId,
        selection: SelectionSet,
    },

    /// Submit a cart action. Adds carry the tag of the page visit that
    /// sent them.
    Cart {
        request: CartRequest,
        visit: Option<Generation>,
    },

    /// Deactivate the signed-in account.
    DeactivateAccount,
}

/// Follow-up work returned by `update`.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct Task {
    effects: Vec<Effect>,
}

impl Task {
    /// Nothing to do.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.effects.is_empty()
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}
