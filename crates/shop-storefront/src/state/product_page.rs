//! Product detail page state and its reconciler.
//!
//! [`ProductPageState`] is the view model of the product detail page: the
//! option buttons, the quantity input, the add-to-cart button and the
//! per-option-value image panels. [`ProductPageState::reconcile`] patches it
//! from a [`VariantAvailability`] answer.

use shop_model::{
    OptionType, OptionValue, OptionValueId, ProductDetail, ProductId, ProductVariantData,
    ProductVariantId, SelectionSet, VariantAvailability,
};

use super::generation::Generation;

/// Message shown when add-to-cart is attempted with an ambiguous selection.
pub const SELECT_ALL_OPTIONS: &str = "Ensure all options are selected.";

/// Message shown when add-to-cart is attempted with a quantity of 0.
pub const QUANTITY_REQUIRED: &str = "Quantity must be at least 1.";

/// A clickable option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionButton {
    pub value: OptionValue,
    pub disabled: bool,
}

/// The buttons of one option type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroupView {
    pub option_type: OptionType,
    pub buttons: Vec<OptionButton>,
}

/// Item quantity input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityInput {
    pub value: u32,
    /// Upper bound; `None` until a variant has been resolved.
    pub max: Option<u32>,
}

impl Default for QuantityInput {
    fn default() -> Self {
        Self { value: 1, max: None }
    }
}

impl QuantityInput {
    /// Bound the input by the stock of the resolved variant.
    pub fn clamp_to_stock(&mut self, perceived_stock: u32) {
        if self.value > perceived_stock {
            self.value = perceived_stock;
        }
        self.max = Some(perceived_stock);
    }

    /// Lower the bound after `added` items went into the cart.
    pub fn consume(&mut self, added: u32) {
        let Some(max) = self.max else {
            return;
        };
        let remaining = max.saturating_sub(added);
        if self.value > remaining {
            self.value = remaining;
        }
        self.max = Some(remaining);
    }
}

/// Data recorded on the add-to-cart button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddToCartButton {
    /// Number of variants matching the current selection.
    pub no_of_variants: Option<usize>,
    /// Representative variant of the current selection.
    pub product_variant_id: Option<ProductVariantId>,
}

impl AddToCartButton {
    /// The variant to add, present only when the selection matches exactly
    /// one variant.
    #[must_use]
    pub fn target(&self) -> Option<ProductVariantId> {
        match self.no_of_variants {
            Some(1) => self.product_variant_id,
            _ => None,
        }
    }

    fn record(&mut self, variant: &ProductVariantData, count: usize) {
        self.no_of_variants = Some(count);
        self.product_variant_id = Some(variant.product_variant_id);
    }
}

/// Images shown for one option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePanel {
    pub option_value_id: OptionValueId,
    pub visible: bool,
}

/// Whether the current selection maps onto any purchasable variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariantStatus {
    /// Nothing reconciled yet.
    #[default]
    Pending,
    /// At least one variant matches.
    Available,
    /// The server reported no matching variant.
    Unavailable,
}

/// View model of the product detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPageState {
    pub product_id: ProductId,
    pub groups: Vec<OptionGroupView>,
    pub quantity: QuantityInput,
    pub add_to_cart: AddToCartButton,
    pub image_panels: Vec<ImagePanel>,
    pub status: VariantStatus,
}

impl ProductPageState {
    /// Build the page as rendered by the server.
    ///
    /// Buttons of the first option type are enabled; every later option type
    /// stays disabled until a selection unlocks it. Products without option
    /// types start with their single variant already on the add-to-cart
    /// button.
    pub fn new(detail: &ProductDetail) -> Self {
        let first_position = detail
            .options
            .iter()
            .map(|g| g.option_type.position)
            .min();

        let groups = detail
            .options
            .iter()
            .map(|group| OptionGroupView {
                option_type: group.option_type.clone(),
                buttons: group
                    .option_values()
                    .map(|value| OptionButton {
                        disabled: Some(value.option_type_position) != first_position,
                        value,
                    })
                    .collect(),
            })
            .collect();

        let image_panels = detail
            .options
            .iter()
            .flat_map(|g| g.values.iter())
            .filter(|v| v.has_images)
            .map(|v| ImagePanel {
                option_value_id: v.id,
                visible: false,
            })
            .collect();

        let mut page = Self {
            product_id: detail.product_id,
            groups,
            quantity: QuantityInput::default(),
            add_to_cart: AddToCartButton::default(),
            image_panels,
            status: VariantStatus::Pending,
        };

        if let Some(variant) = &detail.single_variant {
            page.quantity.clamp_to_stock(variant.perceived_stock);
            page.add_to_cart.record(variant, 1);
            page.status = VariantStatus::Available;
        }

        page
    }

    /// Find a button and the option type it belongs to.
    #[must_use]
    pub fn button(&self, id: OptionValueId) -> Option<(&OptionType, &OptionButton)> {
        self.groups.iter().find_map(|group| {
            group
                .buttons
                .iter()
                .find(|b| b.value.id == id)
                .map(|b| (&group.option_type, b))
        })
    }

    fn button_mut(&mut self, id: OptionValueId) -> Option<&mut OptionButton> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.buttons.iter_mut())
            .find(|b| b.value.id == id)
    }

    /// Whether the button for `id` exists and is enabled.
    #[must_use]
    pub fn is_enabled(&self, id: OptionValueId) -> bool {
        self.button(id).is_some_and(|(_, b)| !b.disabled)
    }

    /// Ids of every enabled button.
    #[must_use]
    pub fn enabled_buttons(&self) -> Vec<OptionValueId> {
        self.groups
            .iter()
            .flat_map(|g| g.buttons.iter())
            .filter(|b| !b.disabled)
            .map(|b| b.value.id)
            .collect()
    }

    /// Ids of the image panels currently shown.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<OptionValueId> {
        self.image_panels
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.option_value_id)
            .collect()
    }

    /// Apply an availability answer for a click at `current_position`.
    ///
    /// Order matters: later option types are locked before the next one is
    /// selectively unlocked, and image panels follow the whole selection,
    /// not only the value just clicked.
    pub fn reconcile(
        &mut self,
        result: &VariantAvailability,
        current_position: u32,
        selection: &SelectionSet,
    ) {
        for group in &mut self.groups {
            if group.option_type.position > current_position {
                for button in &mut group.buttons {
                    button.disabled = true;
                }
            }
        }

        // The availability list only describes the immediate next axis.
        let next_position = current_position.saturating_add(1);
        for id in result.available_ids() {
            match self.button_mut(id) {
                Some(button) if button.value.option_type_position == next_position => {
                    button.disabled = false;
                }
                Some(_) => {}
                None => tracing::debug!("No button for available option value {}", id),
            }
        }

        match result.representative() {
            Some(variant) => {
                self.quantity.clamp_to_stock(variant.perceived_stock);
                self.add_to_cart.record(variant, result.variant_count());
                self.status = VariantStatus::Available;
            }
            None => {
                tracing::debug!("No variant matches the current selection");
                self.add_to_cart.no_of_variants = Some(0);
                self.add_to_cart.product_variant_id = None;
                self.status = VariantStatus::Unavailable;
            }
        }

        for panel in &mut self.image_panels {
            panel.visible = false;
        }
        for id in selection.selected_value_ids() {
            match self.image_panels.iter_mut().find(|p| p.option_value_id == id) {
                Some(panel) => panel.visible = true,
                None => tracing::debug!("Option value {} has no image panel", id),
            }
        }
    }
}

/// A product page for one page visit: the view model plus the selection
/// and request tagging that drive it.
#[derive(Debug, Clone)]
pub struct ProductSession {
    pub page: ProductPageState,
    pub selection: SelectionSet,
    /// Tag of this page visit
    pub visit: Generation,
    /// Tag of the latest availability request sent from this visit
    pub latest_request: Option<Generation>,
}

impl ProductSession {
    /// Start a session on page load with an empty selection.
    pub fn new(detail: &ProductDetail, visit: Generation) -> Self {
        Self {
            page: ProductPageState::new(detail),
            selection: SelectionSet::new(),
            visit,
            latest_request: None,
        }
    }

    /// Whether `generation` tags the latest request of this visit.
    #[must_use]
    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest_request == Some(generation)
    }
}
