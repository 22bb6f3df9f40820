//! Entity model for the WordPress REST API.
//!
//! Every remote resource is an [`Entity`]: a kind plus a bag of attributes.
//! What differs between kinds lives in a static [`EntityDescriptor`]:
//! - the identity attribute (`ID`, `slug` or `name`)
//! - fresh default attributes per instance
//! - a [`UrlStrategy`] for deriving the resource URL
//! - an [`Access`] tag marking read-only vocabularies
//! - a [`WireCodec`] converting between wire JSON and in-memory values
//!
//! Parent lookup ([`ParentLookup`]) and the in-memory [`EntityCollection`]
//! cover relations. Network access lives in `wpapi-client`.

mod codec;
mod collection;
mod defaults;
mod entity;
mod relation;
mod schema;
mod url;
mod value;

pub use codec::{DatedCodec, PlainCodec, WireCodec};
pub use collection::{Collection, EntityCollection};
pub use entity::Entity;
pub use relation::ParentLookup;
pub use schema::{Access, EntityDescriptor, EntityKind, TermScope, UnknownKind, UrlStrategy};
pub use url::join;
pub use value::{attributes_from_json, attributes_to_json, AttributeValue, Attributes};
pub use wpapi_types::{Error, Identity, Result, Timestamp};
