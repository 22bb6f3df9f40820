//! Identity values for remote resources.
//!
//! Posts, users, media and terms are addressed by a numeric `ID`; post
//! types, post statuses and taxonomies by a string (`slug` or `name`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value of an entity's identity attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Numeric identifier assigned by the remote store.
    Id(i64),
    /// Slug or name identifier.
    Slug(String),
}

impl Identity {
    /// Returns the numeric identifier, if this is one.
    #[must_use]
    pub const fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Slug(_) => None,
        }
    }

    /// Returns the slug, if this is one.
    #[must_use]
    pub fn as_slug(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Slug(slug) => Some(slug),
        }
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Identity {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl From<String> for Identity {
    fn from(slug: String) -> Self {
        Self::Slug(slug)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Parses command-line style identities: all-digit input is numeric,
/// anything else is a slug.
impl FromStr for Identity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(Self::Id)
            .unwrap_or_else(|_| Self::Slug(s.to_string())))
    }
}
