//! Wire types for the items API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently, so
//! the integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned identity of an item.
pub type ItemId = i64;

/// A single item as confirmed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

/// Request payload for both create (POST) and update (PUT). The API takes
/// the full `{name, description}` pair in either case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Both fields are required. Only the empty string is rejected;
    /// whitespace is left for the server to judge.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    /// Attach a confirmed id, producing the item the server would hold.
    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
