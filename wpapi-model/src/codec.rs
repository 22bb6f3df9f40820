use serde_json::{Map, Value};
use wpapi_types::{parse_iso8601, Error, Result};

use crate::value::{attributes_from_json, attributes_to_json, AttributeValue, Attributes};
use crate::{Entity, EntityKind};

/// Serialize/deserialize hooks for one entity kind.
///
/// Both hooks run synchronously and completely: `serialize` before a
/// request is dispatched, `deserialize` before a response is merged into
/// the entity. Neither may touch the identity attribute.
///
/// The default implementations map attributes one-to-one onto JSON.
pub trait WireCodec: Send + Sync {
    /// Produce the outbound JSON object for a set of attributes.
    fn serialize(&self, attributes: &Attributes) -> Map<String, Value> {
        attributes_to_json(attributes)
    }

    /// Turn a raw response object into attributes.
    fn deserialize(&self, raw: Map<String, Value>) -> Result<Attributes> {
        Ok(attributes_from_json(raw))
    }

    /// Attributes that must never stay resident on an entity of this kind.
    fn discarded(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Codec for kinds whose wire and memory forms are the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl WireCodec for PlainCodec {}

/// Codec for kinds carrying timestamps and an embedded author.
///
/// Temporal attributes are native timestamps in memory and ISO-8601
/// strings on the wire. The UTC variants are dropped in both directions.
#[derive(Debug, Clone, Copy)]
pub struct DatedCodec {
    pub dates: &'static [&'static str],
    pub utc_variants: &'static [&'static str],
    /// Whether `author` arrives as a username and is held as a User entity.
    pub embeds_author: bool,
}

impl DatedCodec {
    fn parse_date(key: &str, value: Value) -> Result<AttributeValue> {
        match value {
            Value::String(s) => Ok(AttributeValue::Date(parse_iso8601(&s)?)),
            other => Err(Error::InvalidTimestamp(format!(
                "{key} must be an ISO-8601 string, got {other}"
            ))),
        }
    }

    fn parse_author(value: Value) -> Result<AttributeValue> {
        let user = match value {
            Value::String(username) => {
                Entity::new(EntityKind::User).with("username", username)
            }
            Value::Number(n) => Entity::new(EntityKind::User).with("ID", AttributeValue::Number(n)),
            Value::Null => Entity::new(EntityKind::User),
            obj @ Value::Object(_) => Entity::from_wire(EntityKind::User, obj)?,
            other => {
                return Err(Error::UnexpectedShape(format!(
                    "author must be a username, id or object, got {other}"
                )));
            }
        };
        Ok(user.into())
    }
}

impl WireCodec for DatedCodec {
    fn discarded(&self) -> &'static [&'static str] {
        self.utc_variants
    }

    fn serialize(&self, attributes: &Attributes) -> Map<String, Value> {
        attributes
            .iter()
            .filter(|(key, _)| !self.utc_variants.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }

    fn deserialize(&self, raw: Map<String, Value>) -> Result<Attributes> {
        let mut attributes = Attributes::new();
        for (key, value) in raw {
            if self.utc_variants.contains(&key.as_str()) {
                continue;
            }
            let parsed = if self.dates.contains(&key.as_str()) {
                Self::parse_date(&key, value)?
            } else if self.embeds_author && key == "author" {
                Self::parse_author(value)?
            } else {
                AttributeValue::from_json(value)
            };
            attributes.insert(key, parsed);
        }
        Ok(attributes)
    }
}
