//! Cart and account payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ProductVariantId;

/// Action understood by the cart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    AddCartItem,
    UpdateCartItem,
    DeleteCartItem,
}

impl CartAction {
    /// Wire name sent as the `action` form field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddCartItem => "add_cart_item",
            Self::UpdateCartItem => "update_cart_item",
            Self::DeleteCartItem => "delete_cart_item",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to the cart endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub action: CartAction,
    pub product_variant_id: ProductVariantId,
    /// Absent for deletions.
    pub item_quantity: Option<u32>,
}

impl CartRequest {
    pub fn add(product_variant_id: ProductVariantId, item_quantity: u32) -> Self {
        Self {
            action: CartAction::AddCartItem,
            product_variant_id,
            item_quantity: Some(item_quantity),
        }
    }

    pub fn update(product_variant_id: ProductVariantId, item_quantity: u32) -> Self {
        Self {
            action: CartAction::UpdateCartItem,
            product_variant_id,
            item_quantity: Some(item_quantity),
        }
    }

    pub fn delete(product_variant_id: ProductVariantId) -> Self {
        Self {
            action: CartAction::DeleteCartItem,
            product_variant_id,
            item_quantity: None,
        }
    }
}

/// Successful cart endpoint answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResponse {
    /// Number of distinct items in the cart after the action.
    pub cart_quantity: u32,
}

/// Body returned alongside a 403/404 when the server refuses an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
    #[serde(default)]
    pub cart_quantity: Option<u32>,
}

/// Answer to an account deactivation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivationResponse {
    /// Where the client should navigate next.
    pub next_url: String,
}
