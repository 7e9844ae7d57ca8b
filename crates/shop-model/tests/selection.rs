//! Property tests for selection set invalidation.

use std::collections::BTreeMap;

use proptest::prelude::*;
use shop_model::{OptionValueId, SelectionSet};

/// A click on one of four option types (positions 0..4) with a value id.
fn click() -> impl Strategy<Value = (u32, u64)> {
    (0u32..4, 1u64..6)
}

fn type_name(position: u32) -> String {
    format!("type-{position}")
}

proptest! {
    /// After every apply, populated positions are exactly the surviving
    /// choices at or below the last-applied position.
    #[test]
    fn test_populated_positions_form_prefix(clicks in proptest::collection::vec(click(), 1..40)) {
        let mut set = SelectionSet::new();
        // Independent model: position -> value id
        let mut model: BTreeMap<u32, u64> = BTreeMap::new();

        for (position, value) in clicks {
            set.apply(type_name(position), OptionValueId(value), format!("v{value}"), position);
            model.insert(position, value);
            model.retain(|p, _| *p <= position);

            let expected: Vec<u32> = model.keys().copied().collect();
            prop_assert_eq!(set.positions(), expected);
            prop_assert_eq!(set.deepest_position(), Some(position));
            for (p, v) in &model {
                let selection = set.get(&type_name(*p)).unwrap();
                prop_assert_eq!(selection.option_value_id, OptionValueId(*v));
            }
        }
    }

    /// Applying the same click twice leaves the set unchanged after the second.
    #[test]
    fn test_repeated_apply_is_idempotent(
        clicks in proptest::collection::vec(click(), 0..20),
        last in click(),
    ) {
        let mut set = SelectionSet::new();
        for (position, value) in clicks {
            set.apply(type_name(position), OptionValueId(value), format!("v{value}"), position);
        }

        let (position, value) = last;
        set.apply(type_name(position), OptionValueId(value), format!("v{value}"), position);
        let once = set.clone();
        let invalidated = set.apply(type_name(position), OptionValueId(value), format!("v{value}"), position);

        prop_assert!(invalidated.is_empty());
        prop_assert_eq!(set, once);
    }
}

#[test]
fn test_reselecting_upstream_drops_downstream_before_request() {
    let mut set = SelectionSet::new();
    set.apply("Color", OptionValueId(1), "Red", 0);
    set.apply("Size", OptionValueId(11), "M", 1);

    set.apply("Color", OptionValueId(2), "Blue", 0);

    let json: serde_json::Value = serde_json::from_str(&set.to_query_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Color": {"option_value_id": 2, "option_value_name": "Blue", "option_item_pos": 0}
        })
    );
}
