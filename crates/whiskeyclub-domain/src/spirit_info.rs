use serde::{Deserialize, Serialize};

/// Reference to the spirit a review is about.
///
/// Carried inside review documents; the spirit record itself lives in the
/// Spirits container and is not owned by the review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpiritInfo {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl SpiritInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// Spirit reference without a known identifier
    pub fn unidentified(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
