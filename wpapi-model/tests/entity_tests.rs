use pretty_assertions::assert_eq;
use serde_json::json;
use wpapi_model::{AttributeValue, Attributes, Entity, EntityKind, Identity, TermScope};

// ── Construction & defaults ──────────────────────────────────────

#[test]
fn new_entity_has_defaults_and_no_identity() {
    let post = Entity::new(EntityKind::Post);
    assert_eq!(post.get_str("status"), Some("draft"));
    assert_eq!(post.get_str("type"), Some("post"));
    assert_eq!(post.get_i64("parent"), Some(0));
    assert_eq!(post.get("ID"), Some(&AttributeValue::Null));
    assert!(post.is_new());
    assert_eq!(post.identity(), None);
}

#[test]
fn dated_kinds_default_to_native_timestamps() {
    for kind in [EntityKind::Post, EntityKind::Page, EntityKind::Media] {
        let e = Entity::new(kind);
        assert!(e.get_date("date").is_some(), "{kind} date");
        assert!(e.get_date("modified").is_some(), "{kind} modified");
    }
    assert!(Entity::new(EntityKind::Comment).get_date("date").is_some());
}

#[test]
fn author_defaults_to_embedded_user() {
    for kind in [
        EntityKind::Post,
        EntityKind::Page,
        EntityKind::Comment,
        EntityKind::Media,
    ] {
        let e = Entity::new(kind);
        let author = e.get_entity("author").expect("author is a user entity");
        assert_eq!(author.kind(), EntityKind::User);
        assert_eq!(author.get_str("username"), Some(""));
    }
}

#[test]
fn nested_defaults_are_not_shared_between_instances() {
    let mut a = Entity::new(EntityKind::Post);
    let b = Entity::new(EntityKind::Post);

    let mut links = Attributes::new();
    links.insert("self".to_string(), "http://example.com/posts/1".into());
    let mut meta = Attributes::new();
    meta.insert("links".to_string(), links.into());
    a.set("meta", meta);

    let b_links = b.get("meta").and_then(AttributeValue::as_map).unwrap();
    assert_eq!(
        b_links.get("links"),
        Some(&AttributeValue::empty_map()),
        "second instance must keep pristine meta.links"
    );
}

#[test]
fn embedded_author_defaults_are_independent() {
    let mut a = Entity::new(EntityKind::Page);
    let b = Entity::new(EntityKind::Page);
    a.set(
        "author",
        Entity::new(EntityKind::User).with("username", "alice"),
    );
    assert_eq!(
        b.get_entity("author").unwrap().get_str("username"),
        Some("")
    );
}

#[test]
fn with_attributes_merges_over_defaults() {
    let mut attrs = Attributes::new();
    attrs.insert("title".to_string(), "Hello".into());
    attrs.insert("status".to_string(), "publish".into());
    let post = Entity::with_attributes(EntityKind::Post, attrs);
    assert_eq!(post.get_str("title"), Some("Hello"));
    assert_eq!(post.get_str("status"), Some("publish"));
    assert_eq!(post.get_str("format"), Some("standard"));
}

#[test]
fn builder_setter_chains() {
    let user = Entity::new(EntityKind::User)
        .with("username", "jsmith")
        .with("ID", 3i64);
    assert_eq!(user.get_str("username"), Some("jsmith"));
    assert_eq!(user.identity(), Some(Identity::Id(3)));
}

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn identity_attribute_per_kind() {
    assert_eq!(EntityKind::Post.descriptor().identity, "ID");
    assert_eq!(EntityKind::PostType.descriptor().identity, "slug");
    assert_eq!(EntityKind::PostStatus.descriptor().identity, "slug");
    assert_eq!(EntityKind::Taxonomy.descriptor().identity, "name");
}

#[test]
fn set_identity_writes_identity_attribute() {
    let mut status = Entity::new(EntityKind::PostStatus);
    status.set_identity("publish");
    assert_eq!(status.get_str("slug"), Some("publish"));
    assert_eq!(status.identity(), Some(Identity::from("publish")));
    assert!(!status.is_new());
}

#[test]
fn empty_slug_is_not_an_identity() {
    let status = Entity::new(EntityKind::PostStatus).with("slug", "");
    assert!(status.is_new());
}

// ── Wire conversion ──────────────────────────────────────────────

#[test]
fn from_wire_rejects_non_object() {
    let err = Entity::from_wire(EntityKind::User, json!([1, 2])).unwrap_err();
    assert!(err.to_string().contains("expected a JSON object"));
}

#[test]
fn failed_apply_leaves_entity_untouched() {
    let mut post = Entity::new(EntityKind::Post).with("title", "Before");
    let before = post.clone();
    let result = post.apply_wire(json!({"title": "After", "date": "not a date"}));
    assert!(result.is_err());
    assert_eq!(post, before);
}

#[test]
fn apply_wire_merges_into_existing_attributes() {
    let mut user = Entity::new(EntityKind::User).with("nickname", "JS");
    user.apply_wire(json!({"ID": 9, "username": "jsmith"})).unwrap();
    assert_eq!(user.get_str("nickname"), Some("JS"));
    assert_eq!(user.get_str("username"), Some("jsmith"));
    assert_eq!(user.identity(), Some(Identity::Id(9)));
}

#[test]
fn apply_wire_drops_resident_utc_dates() {
    let mut post = Entity::new(EntityKind::Post);
    post.set("date_gmt", "2021-01-01T05:00:00");
    post.set("modified_gmt", "2021-01-01T05:00:00");
    post.apply_wire(json!({
        "ID": 1,
        "date": "2021-01-01T00:00:00",
        "date_gmt": "2021-01-01T05:00:00"
    }))
    .unwrap();

    assert!(post.get_date("date").is_some());
    assert_eq!(post.get("date_gmt"), None);
    assert_eq!(post.get("modified_gmt"), None);
}

#[test]
fn with_attributes_drops_utc_dates_for_dated_kinds() {
    let mut attrs = Attributes::new();
    attrs.insert("date_gmt".into(), "2021-01-01T05:00:00".into());
    attrs.insert("title".into(), "Hi".into());

    let page = Entity::with_attributes(EntityKind::Page, attrs.clone());
    assert_eq!(page.get("date_gmt"), None);
    assert_eq!(page.get_str("title"), Some("Hi"));

    let user = Entity::with_attributes(EntityKind::User, attrs);
    assert_eq!(user.get_str("date_gmt"), Some("2021-01-01T05:00:00"));
}

#[test]
fn plain_kinds_round_trip_through_wire() {
    let user = Entity::from_wire(
        EntityKind::User,
        json!({"ID": 1, "username": "admin", "meta": {"links": {"self": "x"}}}),
    )
    .unwrap();
    let wire = user.to_wire();
    assert_eq!(wire["username"], "admin");
    assert_eq!(wire["meta"]["links"]["self"], "x");
    assert_eq!(wire["ID"], 1);
}

#[test]
fn term_scope_is_not_serialized() {
    let term = Entity::term(TermScope::new("page", "genre")).with("ID", 7i64);
    let wire = term.to_wire();
    assert!(!wire.contains_key("post_type"));
    assert!(!wire.contains_key("taxonomy"));
}

// ── User helpers ─────────────────────────────────────────────────

#[test]
fn avatar_appends_size() {
    let user = Entity::new(EntityKind::User)
        .with("avatar", "http://gravatar.com/avatar/abc?d=mm");
    assert_eq!(user.avatar(96), "http://gravatar.com/avatar/abc?d=mm&s=96");
}

#[test]
fn avatar_without_url_still_carries_size() {
    assert_eq!(Entity::new(EntityKind::User).avatar(24), "&s=24");
}
