//! URL derivation.
//!
//! URLs are rebuilt from the current attributes on every call. Changing a
//! governing attribute (a comment's `post`, a taxonomy's `types`) before a
//! request therefore redirects that request.

use crate::schema::{EntityKind, TermScope, UrlStrategy};
use crate::value::AttributeValue;
use crate::Entity;

/// Joins the API root and a path, tolerating a trailing slash on the root.
pub fn join(root: &str, path: &str) -> String {
    format!("{}{path}", root.trim_end_matches('/'))
}

impl Entity {
    /// Path below the API root, always starting with `/`.
    pub fn path(&self) -> String {
        match self.descriptor().url {
            UrlStrategy::Collection(base) => match self.identity() {
                Some(id) => format!("/{base}/{}", urlencoding::encode(&id.to_string())),
                None => format!("/{base}"),
            },
            UrlStrategy::Taxonomy => format!(
                "/posts/types/{}/taxonomies/{}",
                urlencoding::encode(&self.default_post_type().unwrap_or_default()),
                self.segment("name"),
            ),
            UrlStrategy::Term => {
                let scope = self.term_scope().cloned().unwrap_or_default();
                format!(
                    "/posts/types/{}/taxonomies/{}/terms/{}",
                    urlencoding::encode(&scope.post_type),
                    urlencoding::encode(&scope.taxonomy),
                    self.segment(self.descriptor().identity),
                )
            }
            UrlStrategy::Comment => format!(
                "/posts/{}/comments/{}",
                self.segment("post"),
                self.segment(self.descriptor().identity),
            ),
        }
    }

    /// Absolute URL of this entity under `root`.
    pub fn url(&self, root: &str) -> String {
        join(root, &self.path())
    }

    /// First entry of `types`, or `None` when there is none.
    pub fn default_post_type(&self) -> Option<String> {
        self.get("types")
            .and_then(AttributeValue::as_list)
            .and_then(<[AttributeValue]>::first)
            .filter(|first| !first.is_blank())
            .map(AttributeValue::to_segment)
    }

    /// Percent-encoded path segment for attribute `name`; empty when blank.
    fn segment(&self, name: &str) -> String {
        let raw = self
            .get(name)
            .map(AttributeValue::to_segment)
            .unwrap_or_default();
        urlencoding::encode(&raw).into_owned()
    }
}

impl TermScope {
    /// Scope for terms of `taxonomy`: its default post type and its name.
    /// Missing parts fall back to `post` / `category`, as they do for any
    /// entity that is not a Taxonomy.
    pub fn for_taxonomy(taxonomy: &Entity) -> Self {
        if taxonomy.kind() != EntityKind::Taxonomy {
            return Self::default();
        }
        let name = taxonomy.get_str("name");
        Self::from_parts(taxonomy.default_post_type().as_deref(), name)
    }
}
