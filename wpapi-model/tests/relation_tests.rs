use wpapi_model::{
    Collection, Entity, EntityCollection, EntityKind, Identity, ParentLookup, TermScope,
};

fn post(id: i64) -> Entity {
    Entity::new(EntityKind::Post)
        .with("ID", id)
        .with("title", format!("Post {id}"))
}

// ── parent_id ────────────────────────────────────────────────────

#[test]
fn zero_parent_means_none() {
    assert_eq!(Entity::new(EntityKind::Post).parent_id(), None);
}

#[test]
fn null_parent_means_none() {
    let term = Entity::new(EntityKind::Term);
    assert_eq!(term.parent_id(), None);
}

#[test]
fn numeric_parent_is_an_id() {
    assert_eq!(post(1).with("parent", 5i64).parent_id(), Some(Identity::Id(5)));
}

#[test]
fn numeric_string_parent_is_an_id() {
    assert_eq!(post(1).with("parent", "5").parent_id(), Some(Identity::Id(5)));
}

// ── parent_lookup ────────────────────────────────────────────────

#[test]
fn no_parent_returns_none() {
    let child = post(2);
    assert_eq!(child.parent_lookup::<EntityCollection>(None), ParentLookup::None);

    let collection = EntityCollection::new(EntityKind::Post);
    assert_eq!(child.parent_lookup(Some(&collection)), ParentLookup::None);
}

#[test]
fn resident_parent_is_returned_from_collection() {
    let mut collection = EntityCollection::new(EntityKind::Post);
    collection.add(post(5));
    let child = post(6).with("parent", 5i64);
    collection.add(child.clone());

    match child.parent_lookup(Some(&collection)) {
        ParentLookup::Resident(Some(parent)) => {
            assert_eq!(parent.get_str("title"), Some("Post 5"));
        }
        other => panic!("expected resident parent, got {other:?}"),
    }
}

#[test]
fn unloaded_parent_in_collection_is_unresolved_not_an_error() {
    let collection = EntityCollection::new(EntityKind::Post);
    let child = post(6).with("parent", 5i64);
    assert_eq!(
        child.parent_lookup(Some(&collection)),
        ParentLookup::Resident(None)
    );
}

#[test]
fn without_collection_a_placeholder_is_built() {
    let child = post(6).with("parent", 5i64);
    match child.parent_lookup::<EntityCollection>(None) {
        ParentLookup::Fetch(placeholder) => {
            assert_eq!(placeholder.kind(), EntityKind::Post);
            assert_eq!(placeholder.identity(), Some(Identity::Id(5)));
            assert_eq!(placeholder.get_str("title"), Some(""));
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn lookup_through_trait_object() {
    let mut collection = EntityCollection::new(EntityKind::Post);
    collection.add(post(5));
    let dyn_collection: &dyn Collection = &collection;
    let child = post(6).with("parent", 5i64);
    assert!(matches!(
        child.parent_lookup(Some(dyn_collection)),
        ParentLookup::Resident(Some(_))
    ));
}

#[test]
fn media_parent_is_a_post() {
    let media = Entity::new(EntityKind::Media).with("parent", 3i64);
    match media.parent_lookup::<EntityCollection>(None) {
        ParentLookup::Fetch(placeholder) => assert_eq!(placeholder.kind(), EntityKind::Post),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn comment_placeholder_keeps_post() {
    let reply = Entity::new(EntityKind::Comment)
        .with("post", 10i64)
        .with("parent", 4i64);
    match reply.parent_lookup::<EntityCollection>(None) {
        ParentLookup::Fetch(placeholder) => {
            assert_eq!(placeholder.url("http://x"), "http://x/posts/10/comments/4");
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn term_placeholder_keeps_scope() {
    let scope = TermScope::new("page", "genre");
    let child = Entity::term(scope.clone()).with("ID", 8i64).with("parent", 3i64);
    let ParentLookup::Fetch(placeholder) = child.parent_lookup::<EntityCollection>(None) else {
        panic!("expected a placeholder");
    };
    assert_eq!(placeholder.term_scope(), Some(&scope));
    assert_eq!(placeholder.path(), "/posts/types/page/taxonomies/genre/terms/3");
}

// ── EntityCollection ─────────────────────────────────────────────

#[test]
fn add_replaces_same_identity() {
    let mut collection = EntityCollection::new(EntityKind::Post);
    collection.add(post(1));
    collection.add(post(1).with("title", "Updated"));
    assert_eq!(collection.len(), 1);
    assert_eq!(
        collection.get(&Identity::Id(1)).unwrap().get_str("title"),
        Some("Updated")
    );
}

#[test]
fn unsaved_members_are_kept_but_not_addressable() {
    let mut collection = EntityCollection::new(EntityKind::Post);
    collection.add(Entity::new(EntityKind::Post));
    collection.add(Entity::new(EntityKind::Post));
    assert_eq!(collection.len(), 2);
    assert!(!collection.contains(&Identity::Id(0)));
}

#[test]
fn remove_and_extend() {
    let mut collection = EntityCollection::new(EntityKind::Post);
    collection.extend([post(1), post(2), post(3)]);
    assert_eq!(collection.len(), 3);
    let removed = collection.remove(&Identity::Id(2)).unwrap();
    assert_eq!(removed.identity(), Some(Identity::Id(2)));
    assert!(!collection.contains(&Identity::Id(2)));
    assert_eq!(
        collection.iter().filter_map(Entity::identity).collect::<Vec<_>>(),
        vec![Identity::Id(1), Identity::Id(3)]
    );
    assert_eq!(collection.kind(), EntityKind::Post);
    assert!(!collection.is_empty());
}
