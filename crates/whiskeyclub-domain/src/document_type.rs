use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of documents that share a storage container.
///
/// Serialized by name (`"Review"`), so adding a variant never shifts the tag
/// of documents already stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Review,
    Spirit,
    User,
}

impl DocumentType {
    /// Field that carries the tag in every stored document
    pub const TAG_FIELD: &'static str = "type";

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Review => "Review",
            DocumentType::Spirit => "Spirit",
            DocumentType::User => "User",
        }
    }

    /// Read the type tag of an arbitrary stored document.
    ///
    /// Returns `None` when the tag is missing or names an unknown kind.
    pub fn of_document(document: &serde_json::Value) -> Option<Self> {
        document
            .get(Self::TAG_FIELD)
            .and_then(|tag| serde_json::from_value(tag.clone()).ok())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
