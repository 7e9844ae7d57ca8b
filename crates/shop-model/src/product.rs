//! Product detail catalog.
//!
//! This is the data the server renders into the product detail page: the
//! ordered option groups with their values, and for products without option
//! types the single variant that can be bought directly.

use serde::{Deserialize, Serialize};

use crate::availability::ProductVariantData;
use crate::ids::{OptionValueId, ProductId};
use crate::option::{OptionType, OptionValue};

/// An option value as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValueItem {
    pub id: OptionValueId,
    pub name: String,
    /// Whether the page has an image panel for this value.
    #[serde(default)]
    pub has_images: bool,
}

/// One option type with its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub option_type: OptionType,
    #[serde(default)]
    pub values: Vec<OptionValueItem>,
}

impl OptionGroup {
    /// Values of this group with their owning position filled in.
    pub fn option_values(&self) -> impl Iterator<Item = OptionValue> + '_ {
        self.values.iter().map(|item| {
            OptionValue::new(item.id, item.name.clone(), self.option_type.position)
        })
    }
}

/// Everything the product detail page knows before any interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product_id: ProductId,
    #[serde(default)]
    pub options: Vec<OptionGroup>,
    /// Present when the product has no option types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_variant: Option<ProductVariantData>,
}

impl ProductDetail {
    /// Find the group for an option type by name.
    #[must_use]
    pub fn group(&self, option_type_name: &str) -> Option<&OptionGroup> {
        self.options
            .iter()
            .find(|g| g.option_type.name == option_type_name)
    }

    /// Find an option value by its name within an option type.
    #[must_use]
    pub fn find_value(&self, option_type_name: &str, value_name: &str) -> Option<OptionValue> {
        self.group(option_type_name)?
            .option_values()
            .find(|v| v.name == value_name)
    }
}
