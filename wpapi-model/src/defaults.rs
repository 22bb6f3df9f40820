//! Default attribute sets, one builder per kind.
//!
//! Each builder returns a brand new map so nothing is aliased between
//! instances: `meta.links`, the `now` timestamps and the embedded `author`
//! user are all created per call.

use chrono::Utc;

use crate::value::{AttributeValue as V, Attributes};
use crate::{Entity, EntityKind};

fn attrs<const N: usize>(pairs: [(&str, V); N]) -> Attributes {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn meta() -> V {
    V::Map(attrs([("links", V::empty_map())]))
}

fn empty_list() -> V {
    V::List(Vec::new())
}

fn author() -> V {
    Entity::new(EntityKind::User).into()
}

pub(crate) fn user() -> Attributes {
    attrs([
        ("ID", V::Null),
        ("username", "".into()),
        ("email", "".into()),
        ("password", "".into()),
        ("name", "".into()),
        ("first_name", "".into()),
        ("last_name", "".into()),
        ("nickname", "".into()),
        ("slug", "".into()),
        ("URL", "".into()),
        ("avatar", "".into()),
        ("meta", meta()),
    ])
}

pub(crate) fn post_status() -> Attributes {
    attrs([
        ("slug", V::Null),
        ("name", "".into()),
        ("public", true.into()),
        ("protected", false.into()),
        ("private", false.into()),
        ("queryable", true.into()),
        ("show_in_list", true.into()),
        ("meta", meta()),
    ])
}

pub(crate) fn post_type() -> Attributes {
    attrs([
        ("slug", V::Null),
        ("name", "".into()),
        ("description", "".into()),
        ("labels", V::empty_map()),
        ("queryable", false.into()),
        ("searchable", false.into()),
        ("hierarchical", false.into()),
        ("meta", meta()),
        ("taxonomies", empty_list()),
    ])
}

pub(crate) fn taxonomy() -> Attributes {
    attrs([
        ("name", V::Null),
        ("slug", "".into()),
        ("labels", empty_list()),
        ("types", vec!["post"].into()),
        ("show_cloud", false.into()),
        ("hierarchical", false.into()),
        ("meta", meta()),
    ])
}

pub(crate) fn term() -> Attributes {
    attrs([
        ("ID", V::Null),
        ("name", "".into()),
        ("slug", "".into()),
        ("description", "".into()),
        ("parent", V::Null),
        ("count", 0i64.into()),
        ("link", "".into()),
        ("meta", meta()),
    ])
}

pub(crate) fn media() -> Attributes {
    let now = Utc::now();
    attrs([
        ("ID", V::Null),
        ("title", "".into()),
        ("status", "inherit".into()),
        ("type", "attachment".into()),
        ("author", author()),
        ("content", "".into()),
        ("parent", 0i64.into()),
        ("link", "".into()),
        ("date", now.into()),
        ("modified", now.into()),
        ("format", "standard".into()),
        ("slug", "".into()),
        ("guid", "".into()),
        ("excerpt", V::Null),
        ("menu_order", 0i64.into()),
        ("comment_status", "open".into()),
        ("ping_status", "open".into()),
        ("sticky", false.into()),
        ("date_tz", "Etc/UTC".into()),
        ("modified_tz", "Etc/UTC".into()),
        ("meta", meta()),
        ("terms", empty_list()),
        ("source", "".into()),
        ("is_image", true.into()),
        ("attachment_meta", V::empty_map()),
    ])
}

pub(crate) fn page() -> Attributes {
    let now = Utc::now();
    attrs([
        ("ID", V::Null),
        ("title", "".into()),
        ("status", "publish".into()),
        ("type", "page".into()),
        ("author", author()),
        ("content", "".into()),
        ("parent", 0i64.into()),
        ("link", "".into()),
        ("date", now.into()),
        ("modified", now.into()),
        ("date_tz", "Etc/UTC".into()),
        ("modified_tz", "Etc/UTC".into()),
        ("format", "standard".into()),
        ("slug", "".into()),
        ("guid", "".into()),
        ("excerpt", "".into()),
        ("menu_order", 0i64.into()),
        ("comment_status", "closed".into()),
        ("ping_status", "open".into()),
        ("sticky", false.into()),
        ("password", "".into()),
        ("meta", meta()),
        ("featured_image", V::Null),
        ("terms", empty_list()),
    ])
}

pub(crate) fn post() -> Attributes {
    let now = Utc::now();
    attrs([
        ("ID", V::Null),
        ("title", "".into()),
        ("status", "draft".into()),
        ("type", "post".into()),
        ("author", author()),
        ("content", "".into()),
        ("link", "".into()),
        ("parent", 0i64.into()),
        ("date", now.into()),
        ("modified", now.into()),
        ("format", "standard".into()),
        ("slug", "".into()),
        ("guid", "".into()),
        ("excerpt", "".into()),
        ("menu_order", 0i64.into()),
        ("comment_status", "open".into()),
        ("ping_status", "open".into()),
        ("sticky", false.into()),
        ("date_tz", "Etc/UTC".into()),
        ("modified_tz", "Etc/UTC".into()),
        ("terms", V::empty_map()),
        ("post_meta", V::empty_map()),
        ("meta", meta()),
    ])
}

pub(crate) fn comment() -> Attributes {
    attrs([
        ("ID", V::Null),
        ("post", V::Null),
        ("content", "".into()),
        ("status", "approved".into()),
        ("type", "comment".into()),
        ("parent", 0i64.into()),
        ("author", author()),
        ("date", Utc::now().into()),
        ("date_tz", "Etc/UTC".into()),
        ("meta", meta()),
    ])
}
