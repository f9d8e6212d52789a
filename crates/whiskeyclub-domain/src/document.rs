//! Stored document shape of a [`Review`].
//!
//! [`ReviewDocument`] is the single mapping between review fields and the
//! names used in the document store. Existing documents depend on these names,
//! so they must not change.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use crate::document_type::DocumentType;
use crate::error::DomainError;
use crate::review::{zero_timestamp, Review};
use crate::spirit_info::SpiritInfo;

/// Document field names, in the order they are written.
pub const REVIEW_DOCUMENT_FIELDS: [&str; 11] = [
    "id",
    "spirit",
    "rating",
    "notes",
    "authorId",
    "authorName",
    "created",
    "reviewId",
    "spiritId",
    "userId",
    "type",
];

/// Serialized form of a review.
///
/// `review_id`, `spirit_id` and `user_id` duplicate other fields as partition
/// keys. They are derived when writing and ignored when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub spirit: Option<SpiritInfo>,
    #[serde(default)]
    pub rating: i32,
    #[serde(default, deserialize_with = "nullable_string")]
    pub notes: String,
    #[serde(rename = "authorId", default, deserialize_with = "nullable_string")]
    pub author_id: String,
    #[serde(rename = "authorName", default, deserialize_with = "nullable_string")]
    pub author_name: String,
    #[serde(default = "zero_timestamp", deserialize_with = "lenient_timestamp")]
    pub created: DateTime<Utc>,
    #[serde(rename = "reviewId", default, deserialize_with = "nullable_string")]
    pub review_id: String,
    #[serde(rename = "spiritId", default, deserialize_with = "nullable_string")]
    pub spirit_id: String,
    #[serde(rename = "userId", default, deserialize_with = "nullable_string")]
    pub user_id: String,
    #[serde(rename = "type", default)]
    pub document_type: Option<DocumentType>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 and offset-less ISO-8601 (`0001-01-01T00:00:00`, optionally
/// with fractional seconds), which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc()),
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e))),
        None => Ok(zero_timestamp()),
    }
}

impl From<&Review> for ReviewDocument {
    fn from(review: &Review) -> Self {
        Self {
            id: Some(review.id().to_string()),
            spirit: Some(review.spirit().clone()),
            rating: review.rating(),
            notes: review.notes().to_string(),
            author_id: review.author_id().to_string(),
            author_name: review.author_name().to_string(),
            created: review.created(),
            review_id: review.review_id().to_string(),
            spirit_id: review.spirit_id().to_string(),
            user_id: review.user_id().to_string(),
            document_type: Some(review.document_type()),
        }
    }
}

impl From<Review> for ReviewDocument {
    fn from(review: Review) -> Self {
        Self::from(&review)
    }
}

impl TryFrom<ReviewDocument> for Review {
    type Error = DomainError;

    fn try_from(document: ReviewDocument) -> Result<Self, Self::Error> {
        match document.document_type {
            Some(DocumentType::Review) | None => {}
            Some(found) => {
                return Err(DomainError::UnexpectedDocumentType {
                    expected: DocumentType::Review,
                    found,
                })
            }
        }

        Review::hydrate(
            document.id,
            document.spirit,
            document.author_id,
            document.author_name,
            document.rating,
            document.notes,
            document.created,
        )
    }
}
