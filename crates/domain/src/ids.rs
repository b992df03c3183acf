use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned identifiers are opaque strings on the wire, so IDs wrap a
/// `String` rather than a parsed `Uuid`.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Mint a fresh random identifier (used by the simulated backend).
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(BookId);
define_id!(CharacterId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = CharacterId::new("c1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c1\"");

        let back: CharacterId = serde_json::from_str("\"c1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let a = BookId::generate();
        let b = BookId::generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn sets_can_be_queried_by_str() {
        let mut ids = HashSet::new();
        ids.insert(CharacterId::from("c2"));
        assert!(ids.contains("c2"));
        assert!(!ids.contains("c1"));
    }
}
