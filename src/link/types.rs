//! Link and link collection types

use crate::types::{JsonObject, JsonValue};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Relation that is always replaced instead of accumulated
pub const SELF_REL: &str = "self";

/// Where a link points
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// A fully built URL
    Url {
        /// Link href
        href: String,
    },
    /// A named route, resolved by the router when rendering
    Route {
        /// Route name
        route: String,
        /// Path parameters
        params: JsonObject,
        /// Non-path options (query etc.)
        options: JsonObject,
    },
}

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    /// Link relation (e.g. "self", "next"); the key in `_links`
    #[serde(skip)]
    pub rel: String,
    /// Link target
    #[serde(flatten)]
    pub target: LinkTarget,
    /// Extra link attributes (title, type, templated, ...)
    #[serde(flatten)]
    pub props: JsonObject,
}

impl Link {
    /// Create a link to a literal URL
    pub fn url(rel: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            target: LinkTarget::Url { href: url.into() },
            props: JsonObject::new(),
        }
    }

    /// Create a link to a named route with no parameters
    pub fn route(rel: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            target: LinkTarget::Route {
                route: name.into(),
                params: JsonObject::new(),
                options: JsonObject::new(),
            },
            props: JsonObject::new(),
        }
    }

    /// Set route parameters (no-op for URL links)
    pub fn with_route_params(mut self, new_params: JsonObject) -> Self {
        if let LinkTarget::Route { params, .. } = &mut self.target {
            *params = new_params;
        }
        self
    }

    /// Set route options (no-op for URL links)
    pub fn with_route_options(mut self, new_options: JsonObject) -> Self {
        if let LinkTarget::Route { options, .. } = &mut self.target {
            *options = new_options;
        }
        self
    }

    /// Add a link attribute
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Check if the link points at a route
    pub fn is_route(&self) -> bool {
        matches!(self.target, LinkTarget::Route { .. })
    }

    /// Literal href, if this is a URL link
    pub fn href(&self) -> Option<&str> {
        match &self.target {
            LinkTarget::Url { href } => Some(href),
            LinkTarget::Route { .. } => None,
        }
    }
}

/// Ordered set of links grouped by relation
///
/// Relations keep the order in which they were first added. A relation may
/// carry several links, except `self` which always holds exactly one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkCollection {
    links: Vec<(String, Vec<Link>)>,
}

impl LinkCollection {
    /// Create an empty link collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link, appending to any existing links of the same relation
    pub fn add(&mut self, link: Link) -> &mut Self {
        if link.rel == SELF_REL {
            return self.add_or_replace(link);
        }
        match self.position(&link.rel) {
            Some(idx) => self.links[idx].1.push(link),
            None => self.links.push((link.rel.clone(), vec![link])),
        }
        self
    }

    /// Add a link, replacing every existing link of the same relation
    pub fn add_or_replace(&mut self, link: Link) -> &mut Self {
        match self.position(&link.rel) {
            Some(idx) => self.links[idx].1 = vec![link],
            None => self.links.push((link.rel.clone(), vec![link])),
        }
        self
    }

    /// Get all links for a relation
    pub fn get(&self, rel: &str) -> Option<&[Link]> {
        self.position(rel).map(|idx| self.links[idx].1.as_slice())
    }

    /// Get the first link for a relation
    pub fn first(&self, rel: &str) -> Option<&Link> {
        self.get(rel).and_then(<[Link]>::first)
    }

    /// Check if a relation is present
    pub fn has(&self, rel: &str) -> bool {
        self.position(rel).is_some()
    }

    /// Remove a relation, returning its links
    pub fn remove(&mut self, rel: &str) -> Option<Vec<Link>> {
        self.position(rel).map(|idx| self.links.remove(idx).1)
    }

    /// Number of relations
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if there are no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Relation names in insertion order
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|(rel, _)| rel.as_str())
    }

    /// Iterate over every link in relation order
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().flat_map(|(_, links)| links.iter())
    }

    fn position(&self, rel: &str) -> Option<usize> {
        self.links.iter().position(|(r, _)| r == rel)
    }
}

impl Extend<Link> for LinkCollection {
    fn extend<T: IntoIterator<Item = Link>>(&mut self, iter: T) {
        for link in iter {
            self.add(link);
        }
    }
}

impl FromIterator<Link> for LinkCollection {
    fn from_iter<T: IntoIterator<Item = Link>>(iter: T) -> Self {
        let mut links = Self::new();
        links.extend(iter);
        links
    }
}

/// Serializes as a map of relation to link (single) or list of links
impl Serialize for LinkCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.links.len()))?;
        for (rel, links) in &self.links {
            match links.as_slice() {
                [single] => map.serialize_entry(rel, single)?,
                many => map.serialize_entry(rel, many)?,
            }
        }
        map.end()
    }
}
