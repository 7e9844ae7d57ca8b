//! Option types and option values.

use serde::{Deserialize, Serialize};

use crate::ids::OptionValueId;

/// A configuration axis of a product (e.g. "Color").
///
/// `position` is the slot of the axis in the configuration sequence. Lower
/// positions are chosen earlier; a change at one position invalidates every
/// choice made at a later position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionType {
    /// Display name, unique within a product.
    pub name: String,
    /// Slot index in the configuration sequence.
    pub position: u32,
}

impl OptionType {
    /// Create a new option type.
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A concrete choice within an option type (e.g. "Red").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: OptionValueId,
    pub name: String,
    /// Position of the owning option type.
    pub option_type_position: u32,
}

impl OptionValue {
    pub fn new(id: impl Into<OptionValueId>, name: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            option_type_position: position,
        }
    }
}
