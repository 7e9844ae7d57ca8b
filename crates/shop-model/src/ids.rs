//! Identifier newtypes.
//!
//! The server hands out plain integer primary keys. Wrapping them keeps a
//! product id from being passed where a variant id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Returns the raw integer key.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Primary key of a product.
    ProductId
);

id_type!(
    /// Primary key of an option value (unique within a product).
    OptionValueId
);

id_type!(
    /// Primary key of a purchasable product variant.
    ProductVariantId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: ProductVariantId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductVariantId(42));
        assert_eq!(id.to_string(), "42");
        assert!("x1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&OptionValueId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
