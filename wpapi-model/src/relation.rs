//! Parent lookup for hierarchical kinds.

use wpapi_types::Identity;

use crate::collection::Collection;
use crate::value::AttributeValue;
use crate::{Entity, EntityKind};

/// Outcome of looking up an entity's parent without touching the network.
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLookup<'a> {
    /// `parent` is `0` (or unset): there is no parent.
    None,
    /// The entity belongs to a collection; this is what the collection
    /// holds for the parent id. `None` means the parent is not loaded yet.
    Resident(Option<&'a Entity>),
    /// No collection to consult. The placeholder carries only the parent's
    /// identity and must be fetched before its other attributes are read.
    Fetch(Entity),
}

impl EntityKind {
    /// Kind of entity referenced by `parent`.
    pub fn parent_kind(&self) -> EntityKind {
        match self {
            Self::Media => Self::Post,
            other => *other,
        }
    }
}

impl Entity {
    /// Identity stored in `parent`; `0`, null and empty mean no parent.
    pub fn parent_id(&self) -> Option<Identity> {
        match self.get("parent")? {
            v if v.is_blank() => None,
            AttributeValue::Number(n) => n.as_i64().map(Identity::Id),
            AttributeValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Resolves `parent` against `collection`, the collection this entity
    /// is a member of, if any.
    pub fn parent_lookup<'a, C>(&self, collection: Option<&'a C>) -> ParentLookup<'a>
    where
        C: Collection + ?Sized,
    {
        let Some(parent_id) = self.parent_id() else {
            return ParentLookup::None;
        };

        if let Some(collection) = collection {
            return ParentLookup::Resident(collection.get(&parent_id));
        }

        let mut placeholder = match self.term_scope() {
            Some(scope) => Entity::term(scope.clone()),
            None => Entity::new(self.kind().parent_kind()),
        };
        placeholder.set_identity(parent_id);
        if self.kind() == EntityKind::Comment {
            // comment URLs hang off their post
            if let Some(post) = self.get("post") {
                placeholder.set("post", post.clone());
            }
        }
        ParentLookup::Fetch(placeholder)
    }
}
