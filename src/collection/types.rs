//! The `Collection` value holder

use super::property::{Property, PropertyValue};
use super::source::Source;
use crate::error::{Error, Result};
use crate::link::LinkCollection;
use crate::types::{json_type_name, JsonObject, JsonValue, MapInput};
use tracing::debug;

/// Default key for the embedded group
pub const DEFAULT_COLLECTION_NAME: &str = "items";

/// Default identifier field on each item
pub const DEFAULT_IDENTIFIER_NAME: &str = "id";

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 30;

/// A paginated collection of resources, ready to be rendered as HAL
///
/// Built once around a source, configured through its setters, then handed
/// to the renderer. Setters either replace their field or fail and leave it
/// untouched.
#[derive(Debug)]
pub struct Collection {
    source: Source,
    attributes: JsonObject,
    collection_name: String,
    collection_route: Option<String>,
    collection_route_params: JsonObject,
    collection_route_options: JsonObject,
    resource_route: Option<String>,
    resource_route_params: JsonObject,
    resource_route_options: JsonObject,
    identifier_name: String,
    page: u64,
    page_size: u64,
    links: Option<LinkCollection>,
    resource_links: Option<LinkCollection>,
}

impl Collection {
    /// Create a collection around a source
    ///
    /// Fails with `InvalidCollection` if the source is not array-like.
    pub fn new<S>(source: S) -> Result<Self>
    where
        S: TryInto<Source>,
        Error: From<S::Error>,
    {
        let source = source.try_into()?;
        Ok(Self {
            source,
            attributes: JsonObject::new(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            collection_route: None,
            collection_route_params: JsonObject::new(),
            collection_route_options: JsonObject::new(),
            resource_route: None,
            resource_route_params: JsonObject::new(),
            resource_route_options: JsonObject::new(),
            identifier_name: DEFAULT_IDENTIFIER_NAME.to_string(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            links: None,
            resource_links: None,
        })
    }

    /// Create a collection with the route used to build each item's URI
    ///
    /// Params and options go through the validating setters, so a bad shape
    /// fails construction.
    pub fn with_resource_route<S, P, O>(
        source: S,
        route: impl Into<String>,
        params: Option<P>,
        options: Option<O>,
    ) -> Result<Self>
    where
        S: TryInto<Source>,
        Error: From<S::Error>,
        P: TryInto<MapInput>,
        Error: From<P::Error>,
        O: TryInto<MapInput>,
        Error: From<O::Error>,
    {
        let mut collection = Self::new(source)?;
        collection.set_resource_route(route);
        if let Some(params) = params {
            collection.set_resource_route_params(params)?;
        }
        if let Some(options) = options {
            collection.set_resource_route_options(options)?;
        }
        Ok(collection)
    }

    // ========================================================================
    // Generic read access
    // ========================================================================

    /// Read a field by name (`pageSize`, `page_size`, `PAGESIZE`, ...)
    ///
    /// Reading `links` creates the empty link collection if none is set.
    pub fn get(&mut self, name: &str) -> Result<PropertyValue<'_>> {
        let prop = Property::lookup(name)?;
        Ok(self.property(prop))
    }

    /// Read a resolved property
    pub fn property(&mut self, prop: Property) -> PropertyValue<'_> {
        match prop {
            Property::Source => PropertyValue::Source(&self.source),
            Property::Attributes => PropertyValue::Map(&self.attributes),
            Property::CollectionName => PropertyValue::Text(&self.collection_name),
            Property::CollectionRoute => {
                PropertyValue::OptionalText(self.collection_route.as_deref())
            }
            Property::CollectionRouteParams => PropertyValue::Map(&self.collection_route_params),
            Property::CollectionRouteOptions => PropertyValue::Map(&self.collection_route_options),
            Property::ResourceRoute => PropertyValue::OptionalText(self.resource_route.as_deref()),
            Property::ResourceRouteParams => PropertyValue::Map(&self.resource_route_params),
            Property::ResourceRouteOptions => PropertyValue::Map(&self.resource_route_options),
            Property::IdentifierName => PropertyValue::Text(&self.identifier_name),
            Property::Page => PropertyValue::Integer(self.page),
            Property::PageSize => PropertyValue::Integer(self.page_size),
            Property::Links => PropertyValue::Links(self.links()),
            Property::ResourceLinks => PropertyValue::OptionalLinks(self.resource_links()),
        }
    }

    // ========================================================================
    // Typed getters
    // ========================================================================

    /// Underlying items
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Give up the collection and keep its source
    pub fn into_source(self) -> Source {
        self.source
    }

    /// Extra envelope attributes
    pub fn attributes(&self) -> &JsonObject {
        &self.attributes
    }

    /// Key of the embedded group
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// Route for pagination URIs
    pub fn collection_route(&self) -> Option<&str> {
        self.collection_route.as_deref()
    }

    pub fn collection_route_params(&self) -> &JsonObject {
        &self.collection_route_params
    }

    pub fn collection_route_options(&self) -> &JsonObject {
        &self.collection_route_options
    }

    /// Route for each item's self URI
    pub fn resource_route(&self) -> Option<&str> {
        self.resource_route.as_deref()
    }

    pub fn resource_route_params(&self) -> &JsonObject {
        &self.resource_route_params
    }

    pub fn resource_route_options(&self) -> &JsonObject {
        &self.resource_route_options
    }

    /// Identifier field on each item
    pub fn identifier_name(&self) -> &str {
        &self.identifier_name
    }

    /// Current page, always >= 1
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Items per page, always >= 1
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    // ========================================================================
    // Links
    // ========================================================================

    /// Page-level links, created empty on first access
    pub fn links(&mut self) -> &mut LinkCollection {
        self.links.get_or_insert_with(|| {
            debug!("Creating empty page link collection");
            LinkCollection::new()
        })
    }

    /// Default links for every embedded resource, if configured
    pub fn resource_links(&self) -> Option<&LinkCollection> {
        self.resource_links.as_ref()
    }

    pub fn set_links(&mut self, links: LinkCollection) -> &mut Self {
        self.links = Some(links);
        self
    }

    pub fn set_resource_links(&mut self, links: LinkCollection) -> &mut Self {
        self.resource_links = Some(links);
        self
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn set_attributes(&mut self, attributes: JsonObject) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn set_collection_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.collection_name = name.into();
        self
    }

    pub fn set_collection_route(&mut self, route: impl Into<String>) -> &mut Self {
        self.collection_route = Some(route.into());
        self
    }

    pub fn set_collection_route_params<P>(&mut self, params: P) -> Result<&mut Self>
    where
        P: TryInto<MapInput>,
        Error: From<P::Error>,
    {
        self.collection_route_params = to_map("collection route params", params)?;
        Ok(self)
    }

    pub fn set_collection_route_options<P>(&mut self, options: P) -> Result<&mut Self>
    where
        P: TryInto<MapInput>,
        Error: From<P::Error>,
    {
        self.collection_route_options = to_map("collection route options", options)?;
        Ok(self)
    }

    pub fn set_identifier_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.identifier_name = name.into();
        self
    }

    /// Set the current page from an integer, float or numeric string
    pub fn set_page(&mut self, page: impl Into<JsonValue>) -> Result<&mut Self> {
        self.page = to_positive_int("page", page.into())?;
        Ok(self)
    }

    /// Set the page size from an integer, float or numeric string
    pub fn set_page_size(&mut self, page_size: impl Into<JsonValue>) -> Result<&mut Self> {
        self.page_size = to_positive_int("page size", page_size.into())?;
        Ok(self)
    }

    pub fn set_resource_route(&mut self, route: impl Into<String>) -> &mut Self {
        self.resource_route = Some(route.into());
        self
    }

    pub fn set_resource_route_params<P>(&mut self, params: P) -> Result<&mut Self>
    where
        P: TryInto<MapInput>,
        Error: From<P::Error>,
    {
        self.resource_route_params = to_map("resource route params", params)?;
        Ok(self)
    }

    pub fn set_resource_route_options<P>(&mut self, options: P) -> Result<&mut Self>
    where
        P: TryInto<MapInput>,
        Error: From<P::Error>,
    {
        self.resource_route_options = to_map("resource route options", options)?;
        Ok(self)
    }
}

// ============================================================================
// Validation
// ============================================================================

pub(crate) fn to_map<P>(field: &str, input: P) -> Result<JsonObject>
where
    P: TryInto<MapInput>,
    Error: From<P::Error>,
{
    match input.try_into() {
        Ok(input) => Ok(input.into_map()),
        Err(err) => {
            let err = Error::from(err);
            debug!("Rejected {}: {}", field, err);
            Err(err)
        }
    }
}

/// Coerce a page-like value to an integer >= 1
pub(crate) fn to_positive_int(field: &str, value: JsonValue) -> Result<u64> {
    let exact = match &value {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    if let Some(exact) = exact.filter(|&n| n >= 1) {
        return Ok(exact);
    }

    // fractional, exponent or negative values
    let number = match &value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };

    let Some(number) = number else {
        debug!("Rejected {}: non-numeric {}", field, json_type_name(&value));
        return Err(Error::invalid_argument(format!(
            "{field} must be an integer, received {}",
            json_type_name(&value)
        )));
    };

    let truncated = number.trunc();
    if truncated < 1.0 {
        debug!("Rejected {}: {} is below 1", field, value);
        return Err(Error::invalid_argument(format!(
            "{field} must be a positive integer, received {value}"
        )));
    }

    Ok(truncated as u64)
}
