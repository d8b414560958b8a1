//! Identifiers reported by the node and objects shared between the reader and the writer.
//!
//! The identifiers are opaque strings: they are compared for equality and displayed, never
//! parsed.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

macro_rules! opaque_identifier {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq, Hash)]
        pub struct $name(pub String);

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }
    };
}

opaque_identifier! {
    /// The hash of a transaction, as reported by the node.
    TransactionHash
}

opaque_identifier! {
    /// The hash of a declared contract class.
    ClassHash
}

opaque_identifier! {
    /// The address of a deployed contract.
    ContractAddress
}

opaque_identifier! {
    /// The selector of a contract entry point.
    EntryPointSelector
}

opaque_identifier! {
    /// The hash of a block.
    BlockHash
}

/// An invocation target: a function of a deployed contract together with its calldata.
///
/// Not validated locally; the node checks the target when the call arrives.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct FunctionCall {
    pub contract_address: ContractAddress,
    pub entry_point_selector: EntryPointSelector,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calldata: Vec<String>,
}
