use serde_json::{Map, Value};
use tracing::debug;
use wpapi_types::{Error, Identity, Result, Timestamp};

use crate::schema::{EntityDescriptor, EntityKind, TermScope};
use crate::value::{AttributeValue, Attributes};

/// One remote resource held in memory: a kind plus a bag of attributes.
///
/// Terms additionally carry a [`TermScope`], which is configuration used
/// to build their URL and is never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    attributes: Attributes,
    scope: Option<TermScope>,
}

impl Entity {
    /// A new, unsaved entity holding a fresh copy of the kind's defaults.
    pub fn new(kind: EntityKind) -> Self {
        let scope = (kind == EntityKind::Term).then(|| {
            let scope = TermScope::default();
            debug!(
                "term built without a scope, using {}/{}",
                scope.post_type, scope.taxonomy
            );
            scope
        });
        Self {
            kind,
            attributes: kind.descriptor().defaults(),
            scope,
        }
    }

    /// A new entity with `attributes` merged over the defaults.
    pub fn with_attributes(kind: EntityKind, attributes: Attributes) -> Self {
        let mut entity = Self::new(kind);
        entity.attributes.extend(attributes);
        entity.purge_discarded();
        entity
    }

    /// A new Term bound to a post type and taxonomy.
    pub fn term(scope: TermScope) -> Self {
        Self {
            kind: EntityKind::Term,
            attributes: EntityKind::Term.descriptor().defaults(),
            scope: Some(scope),
        }
    }

    /// Builds an entity from a remote response, running the kind's inbound
    /// hook before the attributes are accepted.
    pub fn from_wire(kind: EntityKind, body: Value) -> Result<Self> {
        let mut entity = Self::new(kind);
        entity.apply_wire(body)?;
        Ok(entity)
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.kind.descriptor()
    }

    pub fn is_read_only(&self) -> bool {
        self.descriptor().is_read_only()
    }

    /// Scope of a Term; `None` for every other kind.
    pub fn term_scope(&self) -> Option<&TermScope> {
        self.scope.as_ref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(AttributeValue::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(AttributeValue::as_i64)
    }

    pub fn get_date(&self, name: &str) -> Option<&Timestamp> {
        self.get(name).and_then(AttributeValue::as_date)
    }

    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.get(name).and_then(AttributeValue::as_entity)
    }

    /// Value of the identity attribute, or `None` while unsaved.
    pub fn identity(&self) -> Option<Identity> {
        match self.get(self.descriptor().identity)? {
            AttributeValue::Number(n) => n.as_i64().map(Identity::Id),
            AttributeValue::String(s) if !s.is_empty() => Some(Identity::Slug(s.clone())),
            _ => None,
        }
    }

    pub fn set_identity(&mut self, identity: impl Into<Identity>) {
        let key = self.descriptor().identity;
        self.set(key, identity.into());
    }

    /// True until the remote store has assigned an identity.
    pub fn is_new(&self) -> bool {
        self.identity().is_none()
    }

    /// Outbound JSON, produced by the kind's serialize hook.
    pub fn to_wire(&self) -> Map<String, Value> {
        self.descriptor().codec.serialize(&self.attributes)
    }

    /// Merges a remote response into this entity through the kind's
    /// deserialize hook. On error the entity is left untouched.
    pub fn apply_wire(&mut self, body: Value) -> Result<()> {
        let Value::Object(raw) = body else {
            return Err(Error::UnexpectedShape(format!(
                "expected a JSON object for {}, got {body}",
                self.kind
            )));
        };
        let parsed = self.descriptor().codec.deserialize(raw)?;
        self.attributes.extend(parsed);
        self.purge_discarded();
        Ok(())
    }

    fn purge_discarded(&mut self) {
        for key in self.descriptor().codec.discarded() {
            self.attributes.remove(*key);
        }
    }

    /// Gravatar-style avatar URL at a given pixel size.
    pub fn avatar(&self, size: u32) -> String {
        format!("{}&s={size}", self.get_str("avatar").unwrap_or_default())
    }
}
