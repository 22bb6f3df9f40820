use wpapi_types::Identity;

use crate::{Entity, EntityKind};

/// Lookup by identity over a set of resident entities.
pub trait Collection {
    /// The member with this identity, if loaded.
    fn get(&self, identity: &Identity) -> Option<&Entity>;
}

/// A plain in-memory collection of entities of one kind, in insertion
/// order. Entities without an identity are kept but cannot be looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection {
    kind: EntityKind,
    members: Vec<Entity>,
}

impl EntityCollection {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Adds an entity, replacing any member with the same identity.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the entity's kind differs from the
    /// collection's.
    pub fn add(&mut self, entity: Entity) {
        debug_assert_eq!(entity.kind(), self.kind);
        if let Some(id) = entity.identity() {
            if let Some(existing) = self
                .members
                .iter_mut()
                .find(|m| m.identity().as_ref() == Some(&id))
            {
                *existing = entity;
                return;
            }
        }
        self.members.push(entity);
    }

    pub fn remove(&mut self, identity: &Identity) -> Option<Entity> {
        let idx = self
            .members
            .iter()
            .position(|m| m.identity().as_ref() == Some(identity))?;
        Some(self.members.remove(idx))
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        Collection::get(self, identity).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.members.iter()
    }
}

impl Collection for EntityCollection {
    fn get(&self, identity: &Identity) -> Option<&Entity> {
        self.members
            .iter()
            .find(|m| m.identity().as_ref() == Some(identity))
    }
}

impl Extend<Entity> for EntityCollection {
    fn extend<I: IntoIterator<Item = Entity>>(&mut self, iter: I) {
        for entity in iter {
            self.add(entity);
        }
    }
}
