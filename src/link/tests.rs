//! Tests for link module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Link Tests
// ============================================================================

#[test]
fn test_url_link() {
    let link = Link::url("next", "https://api.example.com/widgets?page=3");
    assert_eq!(link.rel, "next");
    assert!(!link.is_route());
    assert_eq!(link.href(), Some("https://api.example.com/widgets?page=3"));
}

#[test]
fn test_route_link_with_params() {
    let params = json!({"id": 7}).as_object().unwrap().clone();
    let options = json!({"query": {"page": 2}}).as_object().unwrap().clone();
    let link = Link::route("self", "api.widget")
        .with_route_params(params.clone())
        .with_route_options(options.clone());

    assert!(link.is_route());
    assert!(link.href().is_none());
    assert_eq!(
        link.target,
        LinkTarget::Route {
            route: "api.widget".to_string(),
            params,
            options,
        }
    );
}

#[test]
fn test_route_params_ignored_on_url_link() {
    let params = json!({"id": 7}).as_object().unwrap().clone();
    let link = Link::url("self", "/widgets/7").with_route_params(params);
    assert_eq!(link.href(), Some("/widgets/7"));
}

#[test]
fn test_link_serialization() {
    let link = Link::url("describedby", "/docs/widgets").with_prop("title", "Widget docs");
    assert_eq!(
        serde_json::to_value(&link).unwrap(),
        json!({"href": "/docs/widgets", "title": "Widget docs"})
    );

    let link = Link::route("self", "api.widgets");
    assert_eq!(
        serde_json::to_value(&link).unwrap(),
        json!({"route": "api.widgets", "params": {}, "options": {}})
    );
}

#[test]
fn test_link_with_props_serializes_flat() {
    let mut links = LinkCollection::new();
    links.add(Link::url("self", "/w").with_prop("title", "W"));

    assert_eq!(
        serde_json::to_value(&links).unwrap(),
        json!({"self": {"href": "/w", "title": "W"}})
    );
}

// ============================================================================
// LinkCollection Tests
// ============================================================================

#[test]
fn test_empty_collection() {
    let links = LinkCollection::new();
    assert!(links.is_empty());
    assert_eq!(links.len(), 0);
    assert!(!links.has("self"));
    assert!(links.get("self").is_none());
}

#[test]
fn test_add_accumulates_same_relation() {
    let mut links = LinkCollection::new();
    links
        .add(Link::url("item", "/widgets/1"))
        .add(Link::url("item", "/widgets/2"));

    assert_eq!(links.len(), 1);
    let items = links.get("item").unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].href(), Some("/widgets/2"));
}

#[test]
fn test_add_replaces_self() {
    let mut links = LinkCollection::new();
    links.add(Link::url("self", "/widgets?page=1"));
    links.add(Link::url("self", "/widgets?page=2"));

    assert_eq!(links.get("self").unwrap().len(), 1);
    assert_eq!(links.first("self").unwrap().href(), Some("/widgets?page=2"));
}

#[test]
fn test_add_or_replace() {
    let mut links = LinkCollection::new();
    links.add(Link::url("next", "/a")).add(Link::url("next", "/b"));
    links.add_or_replace(Link::url("next", "/c"));

    let next = links.get("next").unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].href(), Some("/c"));
}

#[test]
fn test_relation_order_preserved() {
    let links: LinkCollection = vec![
        Link::url("self", "/s"),
        Link::url("first", "/f"),
        Link::url("next", "/n"),
        Link::url("last", "/l"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        links.relations().collect::<Vec<_>>(),
        vec!["self", "first", "next", "last"]
    );
    assert_eq!(links.iter().count(), 4);
}

#[test]
fn test_remove() {
    let mut links = LinkCollection::new();
    links.add(Link::url("prev", "/p")).add(Link::url("next", "/n"));

    let removed = links.remove("prev").unwrap();
    assert_eq!(removed.len(), 1);
    assert!(!links.has("prev"));
    assert!(links.has("next"));
    assert!(links.remove("prev").is_none());
}

#[test]
fn test_collection_serialization() {
    let mut links = LinkCollection::new();
    links
        .add(Link::url("self", "/widgets"))
        .add(Link::url("item", "/widgets/1"))
        .add(Link::url("item", "/widgets/2"));

    assert_eq!(
        serde_json::to_value(&links).unwrap(),
        json!({
            "self": {"href": "/widgets"},
            "item": [
                {"href": "/widgets/1"},
                {"href": "/widgets/2"}
            ]
        })
    );
}
