//! Paginated HAL collection
//!
//! # Overview
//!
//! A `Collection` wraps a source of items together with everything a
//! renderer needs to emit a HAL document for it: pagination state, the
//! routes used to build item and page URIs, the embedded group name and
//! the page-level and per-resource links. It never iterates its source
//! and never builds URIs itself.

mod property;
mod source;
mod types;

pub use property::{Property, PropertyValue};
pub use source::{ItemStream, Source};
pub(crate) use types::{to_map, to_positive_int};
pub use types::{Collection, DEFAULT_COLLECTION_NAME, DEFAULT_IDENTIFIER_NAME, DEFAULT_PAGE_SIZE};
