//! Cart page state.

use shop_model::ProductVariantId;

/// One line of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemRow {
    pub product_variant_id: ProductVariantId,
    /// Current value of the row's quantity input.
    pub quantity: u32,
}

impl CartItemRow {
    pub fn new(product_variant_id: impl Into<ProductVariantId>, quantity: u32) -> Self {
        Self {
            product_variant_id: product_variant_id.into(),
            quantity,
        }
    }
}

/// View model of the cart page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartPageState {
    pub rows: Vec<CartItemRow>,
    pub empty_message_visible: bool,
    pub summary_visible: bool,
}

impl CartPageState {
    /// Page as rendered by the server.
    pub fn new(rows: Vec<CartItemRow>) -> Self {
        let empty = rows.is_empty();
        Self {
            rows,
            empty_message_visible: empty,
            summary_visible: !empty,
        }
    }

    #[must_use]
    pub fn row(&self, id: ProductVariantId) -> Option<&CartItemRow> {
        self.rows.iter().find(|r| r.product_variant_id == id)
    }

    /// Update a row's quantity input. Returns `false` for unknown rows.
    pub fn set_quantity(&mut self, id: ProductVariantId, quantity: u32) -> bool {
        match self.rows.iter_mut().find(|r| r.product_variant_id == id) {
            Some(row) => {
                row.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Drop a deleted row and switch to the empty layout once the cart
    /// holds nothing.
    pub fn remove(&mut self, id: ProductVariantId, cart_quantity: u32) {
        self.rows.retain(|r| r.product_variant_id != id);
        if cart_quantity == 0 {
            self.empty_message_visible = true;
            self.summary_visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let page = CartPageState::new(vec![]);
        assert!(page.empty_message_visible);
        assert!(!page.summary_visible);

        let page = CartPageState::new(vec![CartItemRow::new(1, 2)]);
        assert!(!page.empty_message_visible);
        assert!(page.summary_visible);
    }

    #[test]
    fn test_remove_last_row_shows_empty_message() {
        let mut page = CartPageState::new(vec![CartItemRow::new(1, 2), CartItemRow::new(2, 1)]);

        page.remove(ProductVariantId(1), 1);
        assert_eq!(page.rows, vec![CartItemRow::new(2, 1)]);
        assert!(page.summary_visible);

        page.remove(ProductVariantId(2), 0);
        assert!(page.rows.is_empty());
        assert!(page.empty_message_visible);
        assert!(!page.summary_visible);
    }

    #[test]
    fn test_set_quantity_unknown_row() {
        let mut page = CartPageState::new(vec![CartItemRow::new(1, 2)]);
        assert!(page.set_quantity(ProductVariantId(1), 5));
        assert_eq!(page.row(ProductVariantId(1)).map(|r| r.quantity), Some(5));
        assert!(!page.set_quantity(ProductVariantId(9), 5));
    }
}
