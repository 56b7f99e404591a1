//! Typed string codes for externally-assigned identifiers.
//!
//! Account codes and transaction references come from the chart of accounts
//! and the posting source respectively. They are opaque strings to the
//! engine, but wrapping them keeps the two from being swapped at a call site.

use serde::{Deserialize, Serialize};

/// Macro to generate typed string-code wrappers.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new code from any string-like value.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

typed_code!(
    AccountCode,
    "Unique identifier for a chart of accounts entry (e.g., \"1000\")."
);
typed_code!(
    TransactionRef,
    "Unique identifier for a posted transaction (e.g., \"TXN-000042\")."
);
