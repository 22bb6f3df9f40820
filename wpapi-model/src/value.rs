use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use wpapi_types::{format_iso8601, Timestamp};

use crate::Entity;

/// Named attributes of one entity, ordered by name.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A single attribute value while resident in memory.
///
/// Mirrors JSON, plus two in-memory-only variants: native timestamps for
/// temporal attributes and embedded entities for relations such as
/// `author`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<AttributeValue>),
    Map(Attributes),
    Date(Timestamp),
    Entity(Box<Entity>),
}

impl AttributeValue {
    /// Builds an empty mapping value.
    #[must_use]
    pub fn empty_map() -> Self {
        Self::Map(Attributes::new())
    }

    /// Converts a plain JSON value. Never produces `Date` or `Entity`;
    /// that is the job of a type's codec.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Map(attributes_from_json(map)),
        }
    }

    /// Renders the wire form. Timestamps become ISO-8601 strings and
    /// embedded entities are serialized through their own codec.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(attrs) => Value::Object(attributes_to_json(attrs)),
            Self::Date(ts) => Value::String(format_iso8601(ts)),
            Self::Entity(entity) => Value::Object(entity.to_wire()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Timestamp> {
        match self {
            Self::Date(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            Self::Map(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Falsy in the sense the API's URL rules use: null, `false`, zero and
    /// the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text used when the value appears as a URL path segment.
    #[must_use]
    pub fn to_segment(&self) -> String {
        match self {
            v if v.is_blank() => String::new(),
            Self::String(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Date(ts) => format_iso8601(ts),
            other => other.to_json().to_string(),
        }
    }
}

/// Converts a JSON object into attributes without any type-specific rules.
#[must_use]
pub fn attributes_from_json(map: Map<String, Value>) -> Attributes {
    map.into_iter()
        .map(|(k, v)| (k, AttributeValue::from_json(v)))
        .collect()
}

/// Renders attributes as a JSON object.
#[must_use]
pub fn attributes_to_json(attrs: &Attributes) -> Map<String, Value> {
    attrs.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Timestamp> for AttributeValue {
    fn from(ts: Timestamp) -> Self {
        Self::Date(ts)
    }
}

impl From<Entity> for AttributeValue {
    fn from(entity: Entity) -> Self {
        Self::Entity(Box::new(entity))
    }
}

impl From<Attributes> for AttributeValue {
    fn from(attrs: Attributes) -> Self {
        Self::Map(attrs)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<wpapi_types::Identity> for AttributeValue {
    fn from(id: wpapi_types::Identity) -> Self {
        match id {
            wpapi_types::Identity::Id(n) => Self::from(n),
            wpapi_types::Identity::Slug(s) => Self::String(s),
        }
    }
}
