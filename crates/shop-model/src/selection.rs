//! The user's in-progress option selection.
//!
//! A [`SelectionSet`] maps option type names to the value chosen for them.
//! [`SelectionSet::apply`] is the only mutator and keeps the populated
//! positions a contiguous prefix of what the user has interacted with: a
//! write at position `p` drops every selection at a position greater than `p`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::OptionValueId;

/// One chosen option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub option_value_id: OptionValueId,
    pub option_value_name: String,
    /// Position of the option type this selection belongs to.
    #[serde(rename = "option_item_pos")]
    pub option_type_position: u32,
}

/// Mapping from option type name to its current [`Selection`].
///
/// Serializes to the `selected_options` JSON object the option selection
/// endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    entries: BTreeMap<String, Selection>,
}

impl SelectionSet {
    /// Create an empty selection set (page load state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice and invalidate every later-positioned choice.
    ///
    /// The entry for `option_type_name` is written first; invalidation then
    /// uses `position` as the threshold, so re-applying the same choice keeps
    /// downstream selections while any change upstream clears them.
    ///
    /// Returns the names of the option types that were invalidated.
    pub fn apply(
        &mut self,
        option_type_name: impl Into<String>,
        option_value_id: OptionValueId,
        option_value_name: impl Into<String>,
        position: u32,
    ) -> Vec<String> {
        self.entries.insert(
            option_type_name.into(),
            Selection {
                option_value_id,
                option_value_name: option_value_name.into(),
                option_type_position: position,
            },
        );

        let invalidated: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, selection)| selection.option_type_position > position)
            .map(|(name, _)| name.clone())
            .collect();
        for name in &invalidated {
            self.entries.remove(name);
        }
        invalidated
    }

    /// Look up the selection for an option type.
    #[must_use]
    pub fn get(&self, option_type_name: &str) -> Option<&Selection> {
        self.entries.get(option_type_name)
    }

    /// Iterate over `(option type name, selection)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries.iter().map(|(name, sel)| (name.as_str(), sel))
    }

    /// Populated positions in ascending order.
    #[must_use]
    pub fn positions(&self) -> Vec<u32> {
        let mut positions: Vec<u32> = self
            .entries
            .values()
            .map(|s| s.option_type_position)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// The greatest populated position, if any.
    #[must_use]
    pub fn deepest_position(&self) -> Option<u32> {
        self.entries.values().map(|s| s.option_type_position).max()
    }

    /// Ids of every selected option value.
    #[must_use]
    pub fn selected_value_ids(&self) -> Vec<OptionValueId> {
        self.entries.values().map(|s| s.option_value_id).collect()
    }

    /// Whether `id` is currently selected for any option type.
    #[must_use]
    pub fn contains_value(&self, id: OptionValueId) -> bool {
        self.entries.values().any(|s| s.option_value_id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the `selected_options` query parameter.
    pub fn to_query_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
