//! Hypermedia links
//!
//! A `LinkCollection` holds the named links emitted in a `_links` section.
//! Links point either at a literal URL or at a route that the router
//! resolves at render time.

mod types;

pub use types::{Link, LinkCollection, LinkTarget, SELF_REL};

#[cfg(test)]
mod tests;
