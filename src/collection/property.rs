//! Named read access to collection fields
//!
//! Names are matched case-insensitively against a closed alias table holding
//! the camelCase and snake_case spelling of every field.

use super::source::Source;
use crate::error::{Error, Result};
use crate::link::LinkCollection;
use crate::types::JsonObject;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A readable collection field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Source,
    Attributes,
    CollectionName,
    CollectionRoute,
    CollectionRouteParams,
    CollectionRouteOptions,
    ResourceRoute,
    ResourceRouteParams,
    ResourceRouteOptions,
    IdentifierName,
    Page,
    PageSize,
    Links,
    ResourceLinks,
}

impl Property {
    /// Every property, in field-table order
    pub const ALL: [Property; 14] = [
        Property::Source,
        Property::Attributes,
        Property::CollectionName,
        Property::CollectionRoute,
        Property::CollectionRouteParams,
        Property::CollectionRouteOptions,
        Property::ResourceRoute,
        Property::ResourceRouteParams,
        Property::ResourceRouteOptions,
        Property::IdentifierName,
        Property::Page,
        Property::PageSize,
        Property::Links,
        Property::ResourceLinks,
    ];

    /// Canonical camelCase name
    pub fn name(self) -> &'static str {
        match self {
            Property::Source => "source",
            Property::Attributes => "attributes",
            Property::CollectionName => "collectionName",
            Property::CollectionRoute => "collectionRoute",
            Property::CollectionRouteParams => "collectionRouteParams",
            Property::CollectionRouteOptions => "collectionRouteOptions",
            Property::ResourceRoute => "resourceRoute",
            Property::ResourceRouteParams => "resourceRouteParams",
            Property::ResourceRouteOptions => "resourceRouteOptions",
            Property::IdentifierName => "identifierName",
            Property::Page => "page",
            Property::PageSize => "pageSize",
            Property::Links => "links",
            Property::ResourceLinks => "resourceLinks",
        }
    }

    /// Accepted spellings, lowercase
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Property::Source => &["source"],
            Property::Attributes => &["attributes"],
            Property::CollectionName => &["collectionname", "collection_name"],
            Property::CollectionRoute => &["collectionroute", "collection_route"],
            Property::CollectionRouteParams => {
                &["collectionrouteparams", "collection_route_params"]
            }
            Property::CollectionRouteOptions => {
                &["collectionrouteoptions", "collection_route_options"]
            }
            Property::ResourceRoute => &["resourceroute", "resource_route"],
            Property::ResourceRouteParams => &["resourcerouteparams", "resource_route_params"],
            Property::ResourceRouteOptions => &["resourcerouteoptions", "resource_route_options"],
            Property::IdentifierName => &["identifiername", "identifier_name"],
            Property::Page => &["page"],
            Property::PageSize => &["pagesize", "page_size"],
            Property::Links => &["links"],
            Property::ResourceLinks => &["resourcelinks", "resource_links"],
        }
    }

    /// Resolve a property name, ignoring case
    pub fn lookup(name: &str) -> Result<Self> {
        ALIASES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unknown property '{name}'")))
    }
}

static ALIASES: LazyLock<HashMap<&'static str, Property>> = LazyLock::new(|| {
    Property::ALL
        .iter()
        .flat_map(|&prop| prop.aliases().iter().map(move |&alias| (alias, prop)))
        .collect()
});

/// Current value of a property
#[derive(Debug, Clone, Copy)]
pub enum PropertyValue<'a> {
    Source(&'a Source),
    Map(&'a JsonObject),
    Text(&'a str),
    OptionalText(Option<&'a str>),
    Integer(u64),
    Links(&'a LinkCollection),
    OptionalLinks(Option<&'a LinkCollection>),
}

impl<'a> PropertyValue<'a> {
    /// String value, if set
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::OptionalText(s) => s,
            _ => None,
        }
    }

    /// Mapping value
    pub fn as_map(&self) -> Option<&'a JsonObject> {
        match *self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Integer value
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            PropertyValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Link collection, if set
    pub fn as_links(&self) -> Option<&'a LinkCollection> {
        match *self {
            PropertyValue::Links(links) => Some(links),
            PropertyValue::OptionalLinks(links) => links,
            _ => None,
        }
    }

    /// Source value
    pub fn as_source(&self) -> Option<&'a Source> {
        match *self {
            PropertyValue::Source(source) => Some(source),
            _ => None,
        }
    }
}
