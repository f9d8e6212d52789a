pub mod container;
pub mod document;
pub mod document_type;
pub mod error;
pub mod review;
pub mod spirit_info;

pub use container::Container;
pub use document::{ReviewDocument, REVIEW_DOCUMENT_FIELDS};
pub use document_type::DocumentType;
pub use error::DomainError;
pub use review::Review;
pub use spirit_info::SpiritInfo;
