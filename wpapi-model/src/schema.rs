use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{DatedCodec, PlainCodec, WireCodec};
use crate::defaults;
use crate::value::Attributes;

/// Every resource kind the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    PostStatus,
    PostType,
    Taxonomy,
    Term,
    Media,
    Page,
    Post,
    Comment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        Self::User,
        Self::PostStatus,
        Self::PostType,
        Self::Taxonomy,
        Self::Term,
        Self::Media,
        Self::Page,
        Self::Post,
        Self::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::PostStatus => "post_status",
            Self::PostType => "post_type",
            Self::Taxonomy => "taxonomy",
            Self::Term => "term",
            Self::Media => "media",
            Self::Page => "page",
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }

    /// Static metadata shared by every entity of this kind.
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        match self {
            Self::User => &USER,
            Self::PostStatus => &POST_STATUS,
            Self::PostType => &POST_TYPE,
            Self::Taxonomy => &TAXONOMY,
            Self::Term => &TERM,
            Self::Media => &MEDIA,
            Self::Page => &PAGE,
            Self::Post => &POST,
            Self::Comment => &COMMENT,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

/// Accepts the snake_case name, with `-` or a trailing plural `s` tolerated
/// (`posts`, `post-types`, `media`).
impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let singular = match normalized.as_str() {
            "taxonomies" => "taxonomy",
            "post_statuses" => "post_status",
            other => other.strip_suffix('s').unwrap_or(other),
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular || kind.as_str() == normalized)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Whether entities of a kind may be written back to the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Writable,
    /// Saves and deletes are refused without touching the entity or the
    /// network.
    ReadOnly,
}

/// How a kind derives its URL from its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStrategy {
    /// `root/<path>[/<identity>]`.
    Collection(&'static str),
    /// `root/posts/types/<first of types>/taxonomies/<name>`.
    Taxonomy,
    /// `root/posts/types/<type>/taxonomies/<taxonomy>/terms/<ID>`, with
    /// type and taxonomy taken from the entity's [`TermScope`].
    Term,
    /// `root/posts/<post>/comments/<ID>`.
    Comment,
}

/// Static, per-kind metadata.
pub struct EntityDescriptor {
    pub kind: EntityKind,
    /// Name of the attribute that addresses an entity remotely.
    pub identity: &'static str,
    pub access: Access,
    pub url: UrlStrategy,
    pub codec: &'static dyn WireCodec,
    defaults: fn() -> Attributes,
}

impl EntityDescriptor {
    /// A fresh copy of the default attributes. Nested maps, timestamps and
    /// embedded users are rebuilt on every call and never shared.
    pub fn defaults(&self) -> Attributes {
        (self.defaults)()
    }

    pub fn is_read_only(&self) -> bool {
        self.access == Access::ReadOnly
    }
}

impl fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("kind", &self.kind)
            .field("identity", &self.identity)
            .field("access", &self.access)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Post type and taxonomy a Term belongs to.
///
/// Supplied once when the Term is built; it is configuration, not an
/// attribute, and is never sent to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermScope {
    pub post_type: String,
    pub taxonomy: String,
}

impl TermScope {
    pub fn new(post_type: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            post_type: post_type.into(),
            taxonomy: taxonomy.into(),
        }
    }

    /// Builds a scope from optional parts, falling back to the defaults for
    /// whatever is missing or empty.
    pub fn from_parts(post_type: Option<&str>, taxonomy: Option<&str>) -> Self {
        let fallback = Self::default();
        Self {
            post_type: post_type
                .filter(|s| !s.is_empty())
                .map_or(fallback.post_type, str::to_string),
            taxonomy: taxonomy
                .filter(|s| !s.is_empty())
                .map_or(fallback.taxonomy, str::to_string),
        }
    }
}

impl Default for TermScope {
    fn default() -> Self {
        Self::new("post", "category")
    }
}

const POST_DATES: DatedCodec = DatedCodec {
    dates: &["date", "modified"],
    utc_variants: &["date_gmt", "modified_gmt"],
    embeds_author: true,
};

const COMMENT_DATES: DatedCodec = DatedCodec {
    dates: &["date"],
    utc_variants: &["date_gmt", "modified_gmt"],
    embeds_author: true,
};

static USER: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::User,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Collection("users"),
    codec: &PlainCodec,
    defaults: defaults::user,
};

static POST_STATUS: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::PostStatus,
    identity: "slug",
    access: Access::ReadOnly,
    url: UrlStrategy::Collection("posts/statuses"),
    codec: &PlainCodec,
    defaults: defaults::post_status,
};

static POST_TYPE: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::PostType,
    identity: "slug",
    access: Access::ReadOnly,
    url: UrlStrategy::Collection("posts/types"),
    codec: &PlainCodec,
    defaults: defaults::post_type,
};

static TAXONOMY: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Taxonomy,
    identity: "name",
    access: Access::Writable,
    url: UrlStrategy::Taxonomy,
    codec: &PlainCodec,
    defaults: defaults::taxonomy,
};

static TERM: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Term,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Term,
    codec: &PlainCodec,
    defaults: defaults::term,
};

static MEDIA: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Media,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Collection("media"),
    codec: &POST_DATES,
    defaults: defaults::media,
};

static PAGE: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Page,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Collection("pages"),
    codec: &POST_DATES,
    defaults: defaults::page,
};

static POST: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Post,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Collection("posts"),
    codec: &POST_DATES,
    defaults: defaults::post,
};

static COMMENT: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Comment,
    identity: "ID",
    access: Access::Writable,
    url: UrlStrategy::Comment,
    codec: &COMMENT_DATES,
    defaults: defaults::comment,
};
