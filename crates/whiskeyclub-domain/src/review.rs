use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::container::Container;
use crate::document::ReviewDocument;
use crate::document_type::DocumentType;
use crate::error::DomainError;
use crate::spirit_info::SpiritInfo;

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch, negated.
const ZERO_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Timestamp carried by reviews whose creation time was never recorded.
pub fn zero_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIMESTAMP_SECONDS, 0).unwrap_or_default()
}

/// A user's review of a spirit.
///
/// Fields are private and have no setters: a `Review` is immutable once built.
/// It is serialized through [`ReviewDocument`], which also adds the derived
/// partition keys (`reviewId`, `spiritId`, `userId`) and the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReviewDocument", into = "ReviewDocument")]
pub struct Review {
    id: String,
    spirit: SpiritInfo,
    rating: i32,
    notes: String,
    author_id: String,
    author_name: String,
    created: DateTime<Utc>,
}

impl Review {
    /// Build a new review.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `id` is empty or
    /// whitespace, and with [`DomainError::MissingRequiredValue`] when no spirit
    /// is given. The id is checked first.
    pub fn new(
        id: impl Into<String>,
        spirit: impl Into<Option<SpiritInfo>>,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let (id, spirit) = validate_identity(Some(id.into()), spirit.into())?;

        Ok(Self {
            id,
            spirit,
            rating: 0,
            notes: String::new(),
            author_id: author_id.into(),
            author_name: author_name.into(),
            created: zero_timestamp(),
        })
    }

    /// Rebuild a review from stored state, keeping the persisted rating,
    /// notes and creation time.
    pub(crate) fn hydrate(
        id: Option<String>,
        spirit: Option<SpiritInfo>,
        author_id: String,
        author_name: String,
        rating: i32,
        notes: String,
        created: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let (id, spirit) = validate_identity(id, spirit)?;

        Ok(Self {
            id,
            spirit,
            rating,
            notes,
            author_id,
            author_name,
            created,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn spirit(&self) -> &SpiritInfo {
        &self.spirit
    }

    /// Rating out of 5. Not range-checked.
    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Partition key for the Reviews container
    pub fn review_id(&self) -> &str {
        &self.id
    }

    /// Partition key for the Spirits container; empty when the spirit has no id
    pub fn spirit_id(&self) -> &str {
        self.spirit.id.as_deref().unwrap_or_default()
    }

    /// Partition key for the Users container
    pub fn user_id(&self) -> &str {
        &self.author_id
    }

    pub fn document_type(&self) -> DocumentType {
        DocumentType::Review
    }

    /// Value this review is routed on within `container`.
    pub fn partition_key(&self, container: Container) -> &str {
        match container {
            Container::Reviews => self.review_id(),
            Container::Spirits => self.spirit_id(),
            Container::Users => self.user_id(),
        }
    }
}

fn validate_identity(
    id: Option<String>,
    spirit: Option<SpiritInfo>,
) -> Result<(String, SpiritInfo), DomainError> {
    let id = match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(DomainError::blank("id")),
    };
    let spirit = spirit.ok_or_else(|| DomainError::missing("spirit"))?;
    Ok((id, spirit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_spirit() -> SpiritInfo {
        SpiritInfo::new("sp-9", "Lagavulin 16")
    }

    #[test]
    fn test_new_review() {
        let review = Review::new("rev-1", sample_spirit(), "user-42", "Alice").unwrap();

        assert_eq!(review.id(), "rev-1");
        assert_eq!(review.review_id(), "rev-1");
        assert_eq!(review.spirit_id(), "sp-9");
        assert_eq!(review.user_id(), "user-42");
        assert_eq!(review.author_name(), "Alice");
        assert_eq!(review.document_type(), DocumentType::Review);
    }

    #[test]
    fn test_new_review_has_default_state() {
        let review = Review::new("rev-1", sample_spirit(), "user-42", "Alice").unwrap();

        assert_eq!(review.rating(), 0);
        assert_eq!(review.notes(), "");
        assert_eq!(review.created(), zero_timestamp());
    }

    #[test]
    fn test_zero_timestamp_is_year_one() {
        assert_eq!(zero_timestamp().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = Review::new("", sample_spirit(), "user-42", "Alice").unwrap_err();
        assert_eq!(err, DomainError::blank("id"));
    }

    #[test]
    fn test_whitespace_id_rejected() {
        let err = Review::new("   ", sample_spirit(), "user-42", "Alice").unwrap_err();
        assert_eq!(err.param(), Some("id"));
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[test]
    fn test_missing_spirit_rejected() {
        let err = Review::new("rev-1", None, "user-42", "Alice").unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredValue { param: "spirit" });
    }

    #[test]
    fn test_id_checked_before_spirit() {
        let err = Review::new("", None, "user-42", "Alice").unwrap_err();
        assert_eq!(err.param(), Some("id"));
    }

    #[test]
    fn test_empty_author_allowed() {
        let review = Review::new("rev-1", sample_spirit(), "", "").unwrap();
        assert_eq!(review.user_id(), "");
        assert_eq!(review.author_name(), "");
    }

    #[test]
    fn test_spirit_without_id_routes_to_empty_key() {
        let review = Review::new("rev-1", SpiritInfo::unidentified("Mystery dram"), "user-42", "Alice")
            .unwrap();
        assert_eq!(review.spirit_id(), "");
        assert_eq!(review.partition_key(Container::Spirits), "");
    }

    #[test]
    fn test_partition_key_per_container() {
        let review = Review::new("rev-1", sample_spirit(), "user-42", "Alice").unwrap();

        assert_eq!(review.partition_key(Container::Reviews), "rev-1");
        assert_eq!(review.partition_key(Container::Spirits), "sp-9");
        assert_eq!(review.partition_key(Container::Users), "user-42");
    }

    #[test]
    fn test_hydrate_keeps_stored_state() {
        let created = DateTime::parse_from_rfc3339("2023-05-01T18:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let review = Review::hydrate(
            Some("rev-1".to_string()),
            Some(sample_spirit()),
            "user-42".to_string(),
            "Alice".to_string(),
            4,
            "Peat and iodine".to_string(),
            created,
        )
        .unwrap();

        assert_eq!(review.rating(), 4);
        assert_eq!(review.notes(), "Peat and iodine");
        assert_eq!(review.created(), created);
    }

    #[test]
    fn test_hydrate_without_id_rejected() {
        let err = Review::hydrate(
            None,
            Some(sample_spirit()),
            String::new(),
            String::new(),
            0,
            String::new(),
            zero_timestamp(),
        )
        .unwrap_err();
        assert_eq!(err.param(), Some("id"));
    }

    proptest! {
        #[test]
        fn prop_valid_input_constructs(
            id in "[a-z0-9-]{0,8}[a-z0-9][a-z0-9 -]{0,8}",
            spirit_id in proptest::option::of("[a-z0-9-]{1,12}"),
            author_id in ".{0,16}",
            author_name in ".{0,16}",
        ) {
            let spirit = SpiritInfo { id: spirit_id.clone(), name: String::new() };
            let review = Review::new(id.clone(), spirit, author_id.clone(), author_name).unwrap();

            prop_assert_eq!(review.id(), id.as_str());
            prop_assert_eq!(review.review_id(), id.as_str());
            prop_assert_eq!(review.user_id(), author_id.as_str());
            prop_assert_eq!(review.spirit_id(), spirit_id.as_deref().unwrap_or(""));
            prop_assert_eq!(review.rating(), 0);
            prop_assert_eq!(review.notes(), "");
            prop_assert_eq!(review.created(), zero_timestamp());
        }

        #[test]
        fn prop_blank_id_rejected(
            id in "[ \t\r\n]{0,6}",
            author_id in ".{0,16}",
        ) {
            let err = Review::new(id, sample_spirit(), author_id, "Alice").unwrap_err();
            prop_assert_eq!(err, DomainError::blank("id"));
        }
    }
}
