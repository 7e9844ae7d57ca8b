//! Server answer to an option selection query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{OptionValueId, ProductVariantId};

/// A product variant consistent with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariantData {
    pub product_variant_id: ProductVariantId,
    /// Stock minus the quantity already reserved in the active cart.
    pub perceived_stock: u32,
}

/// Variants matching a selection and the values selectable next.
///
/// Both fields default to empty: the server answers `{}` to a request it
/// does not recognise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAvailability {
    /// Matching variants in server order. The first one is representative.
    #[serde(default)]
    pub product_variants_data: Vec<ProductVariantData>,
    /// Option values still selectable, keyed by id with their names.
    #[serde(default)]
    pub available_option_values_data: BTreeMap<OptionValueId, String>,
}

impl VariantAvailability {
    /// The variant whose stock and id drive the quantity input and the
    /// add-to-cart button.
    #[must_use]
    pub fn representative(&self) -> Option<&ProductVariantData> {
        self.product_variants_data.first()
    }

    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.product_variants_data.len()
    }

    /// Ids of the option values selectable at the next position.
    pub fn available_ids(&self) -> impl Iterator<Item = OptionValueId> + '_ {
        self.available_option_values_data.keys().copied()
    }
}
