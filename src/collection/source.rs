//! Collection sources
//!
//! The items a collection represents: either an in-memory array or a lazy
//! stream whose iteration contract (single-pass or repeatable) belongs to
//! whoever produced it.

use crate::error::{Error, Result};
use crate::types::{json_type_name, JsonValue};
use std::fmt;

/// Boxed lazy item iterator
pub struct ItemStream(Box<dyn Iterator<Item = JsonValue> + Send>);

impl ItemStream {
    /// Wrap an iterator
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = JsonValue>,
        I::IntoIter: Send + 'static,
    {
        Self(Box::new(iter.into_iter()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl fmt::Debug for ItemStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemStream").field(&self.size_hint()).finish()
    }
}

/// Underlying data of a collection
#[derive(Debug)]
pub enum Source {
    /// In-memory items
    Array(Vec<JsonValue>),
    /// Lazily produced items
    Stream(ItemStream),
}

impl Source {
    /// Create a stream source from any iterator of items
    pub fn stream<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = JsonValue>,
        I::IntoIter: Send + 'static,
    {
        Source::Stream(ItemStream::new(iter))
    }

    /// Source kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Array(_) => "array",
            Source::Stream(_) => "stream",
        }
    }

    /// Item count if known without iterating
    ///
    /// Exact for arrays; for streams, the iterator's upper size bound.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Source::Array(items) => Some(items.len()),
            Source::Stream(stream) => stream.size_hint().1,
        }
    }

    /// Borrow the items of an array source
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            Source::Array(items) => Some(items),
            Source::Stream(_) => None,
        }
    }

    /// Hand the items over for rendering
    pub fn into_items(self) -> Box<dyn Iterator<Item = JsonValue> + Send> {
        match self {
            Source::Array(items) => Box::new(items.into_iter()),
            Source::Stream(stream) => stream.0,
        }
    }
}

impl From<Vec<JsonValue>> for Source {
    fn from(items: Vec<JsonValue>) -> Self {
        Source::Array(items)
    }
}

impl From<ItemStream> for Source {
    fn from(stream: ItemStream) -> Self {
        Source::Stream(stream)
    }
}

impl TryFrom<JsonValue> for Source {
    type Error = Error;

    /// Arrays and objects are array-like; every scalar is rejected.
    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(items) => Ok(Source::Array(items)),
            JsonValue::Object(map) => Ok(Source::Array(map.into_iter().map(|(_, v)| v).collect())),
            other => Err(Error::invalid_collection(json_type_name(&other))),
        }
    }
}
