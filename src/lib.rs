// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # hal-collection
//!
//! A paginated collection of resources, modelled for rendering as a HAL
//! document: embedded items grouped under a name, pagination state, the
//! routes used to build item and page URIs, and hypermedia links.
//!
//! The crate only holds and validates this data. Resolving routes into
//! URIs and serializing the final document belong to the router and the
//! renderer that consume a `Collection`.
//!
//! ## Quick Start
//!
//! ```rust
//! use hal_collection::{Collection, Link, LinkCollection, Result};
//! use serde_json::json;
//!
//! fn build() -> Result<Collection> {
//!     let mut collection = Collection::with_resource_route(
//!         json!([{"id": 1}, {"id": 2}]),
//!         "api.widget",
//!         Some(json!({"version": 2})),
//!         None::<serde_json::Value>,
//!     )?;
//!
//!     collection
//!         .set_collection_route("api.widgets")
//!         .set_collection_name("widgets")
//!         .set_page(2)?
//!         .set_page_size(10)?;
//!
//!     let mut links = LinkCollection::new();
//!     links.add(Link::route("describedby", "api.docs"));
//!     collection.set_resource_links(links);
//!
//!     Ok(collection)
//! }
//!
//! let mut collection = build().unwrap();
//! assert_eq!(collection.get("page_size").unwrap().as_u64(), Some(10));
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Hypermedia links
pub mod link;

/// The paginated collection
pub mod collection;

/// Collection defaults from YAML/JSON
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::{Collection, ItemStream, Property, PropertyValue, Source};
pub use config::CollectionConfig;
pub use error::{Error, Result};
pub use link::{Link, LinkCollection, LinkTarget};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
