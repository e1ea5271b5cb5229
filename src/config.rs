//! Collection defaults loaded from YAML or JSON
//!
//! A `CollectionConfig` holds the per-endpoint settings a controller would
//! otherwise set by hand: routes, names and page size. Applying it goes
//! through the collection's own setters, so the same validation applies.

use crate::collection::{to_map, to_positive_int, Collection};
use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Collection settings for one endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Key of the embedded group
    pub collection_name: Option<String>,

    /// Identifier field on each item
    pub identifier_name: Option<String>,

    /// Items per page; validated when applied
    pub page_size: Option<JsonValue>,

    /// Route for pagination links
    pub collection_route: Option<String>,

    /// Mapping or list of `[key, value]` pairs
    pub collection_route_params: Option<JsonValue>,

    pub collection_route_options: Option<JsonValue>,

    /// Route for each item's self link
    pub resource_route: Option<String>,

    pub resource_route_params: Option<JsonValue>,

    pub resource_route_options: Option<JsonValue>,

    /// Extra envelope attributes
    pub attributes: Option<JsonObject>,
}

impl CollectionConfig {
    /// Parse from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Collection {
    /// Apply every setting present in `config`
    ///
    /// All settings are validated before any is assigned, so a failing
    /// config leaves the collection unchanged.
    pub fn apply_config(&mut self, config: &CollectionConfig) -> Result<&mut Self> {
        let page_size = config
            .page_size
            .clone()
            .map(|value| to_positive_int("page size", value))
            .transpose()?;
        let collection_route_params =
            validated_map("collection route params", config.collection_route_params.as_ref())?;
        let collection_route_options =
            validated_map("collection route options", config.collection_route_options.as_ref())?;
        let resource_route_params =
            validated_map("resource route params", config.resource_route_params.as_ref())?;
        let resource_route_options =
            validated_map("resource route options", config.resource_route_options.as_ref())?;

        if let Some(name) = &config.collection_name {
            self.set_collection_name(name.as_str());
        }
        if let Some(name) = &config.identifier_name {
            self.set_identifier_name(name.as_str());
        }
        if let Some(page_size) = page_size {
            self.set_page_size(page_size)?;
        }
        if let Some(route) = &config.collection_route {
            self.set_collection_route(route.as_str());
        }
        if let Some(params) = collection_route_params {
            self.set_collection_route_params(params)?;
        }
        if let Some(options) = collection_route_options {
            self.set_collection_route_options(options)?;
        }
        if let Some(route) = &config.resource_route {
            self.set_resource_route(route.as_str());
        }
        if let Some(params) = resource_route_params {
            self.set_resource_route_params(params)?;
        }
        if let Some(options) = resource_route_options {
            self.set_resource_route_options(options)?;
        }
        if let Some(attributes) = &config.attributes {
            self.set_attributes(attributes.clone());
        }
        Ok(self)
    }
}

fn validated_map(field: &str, value: Option<&JsonValue>) -> Result<Option<JsonObject>> {
    value.cloned().map(|value| to_map(field, value)).transpose()
}
