//! Entity persistence and relation fetches on top of a [`Transport`].

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use wpapi_model::{Collection, Entity, EntityKind, Identity, ParentLookup, TermScope};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::transport::{Transport, WriteMode};

/// Result of a save or delete that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The remote store accepted the request.
    Completed,
    /// The entity's kind is read-only. Nothing was changed or sent.
    NotPermitted,
    /// Delete of an entity that was never saved; nothing was sent.
    Unsaved,
}

/// Parent of an entity, as returned by [`Client::parent`].
#[derive(Debug)]
pub enum Parent {
    /// The entity has no parent.
    None,
    /// Looked up in the entity's collection. `None` if not loaded there.
    Resident(Option<Entity>),
    /// Not resident; a fetch is running in the background.
    Pending(PendingParent),
}

/// A placeholder parent plus the fetch that will populate it.
#[derive(Debug)]
pub struct PendingParent {
    placeholder: Entity,
    handle: JoinHandle<ClientResult<Entity>>,
}

impl PendingParent {
    /// The unpopulated parent: only its identity is meaningful.
    pub fn placeholder(&self) -> &Entity {
        &self.placeholder
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the fetch and returns the populated parent, or the
    /// transport's failure unchanged.
    pub async fn wait(self) -> ClientResult<Entity> {
        self.handle
            .await
            .map_err(|e| ClientError::Join(e.to_string()))?
    }
}

/// Reads and writes entities through a transport, applying each kind's
/// URL rule, codec and access policy.
#[derive(Clone)]
pub struct Client {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// A client using the HTTP transport.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// A client using any transport.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL of `entity`, recomputed from its current attributes.
    pub fn url(&self, entity: &Entity) -> String {
        entity.url(&self.config.root)
    }

    /// Refreshes `entity` from the remote store.
    pub async fn fetch(&self, entity: &mut Entity) -> ClientResult<()> {
        let body = self.transport.fetch(&self.url(entity)).await?;
        entity.apply_wire(body)?;
        Ok(())
    }

    /// Fetches the entity of `kind` with `identity`.
    pub async fn get(
        &self,
        kind: EntityKind,
        identity: impl Into<Identity>,
    ) -> ClientResult<Entity> {
        let mut entity = Entity::new(kind);
        entity.set_identity(identity);
        self.fetch(&mut entity).await?;
        Ok(entity)
    }

    /// Fetches a term of the taxonomy described by `scope`.
    pub async fn get_term(
        &self,
        scope: TermScope,
        identity: impl Into<Identity>,
    ) -> ClientResult<Entity> {
        let mut term = Entity::term(scope);
        term.set_identity(identity);
        self.fetch(&mut term).await?;
        Ok(term)
    }

    /// Fetches a comment on `post`.
    pub async fn get_comment(&self, post: i64, identity: i64) -> ClientResult<Entity> {
        let mut comment = Entity::new(EntityKind::Comment).with("post", post);
        comment.set_identity(identity);
        self.fetch(&mut comment).await?;
        Ok(comment)
    }

    /// Creates or updates `entity`, then merges the stored representation
    /// back into it. Read-only kinds return [`WriteOutcome::NotPermitted`]
    /// without touching the entity or the network.
    pub async fn save(&self, entity: &mut Entity) -> ClientResult<WriteOutcome> {
        if entity.is_read_only() {
            debug!("refusing to save read-only {}", entity.kind());
            return Ok(WriteOutcome::NotPermitted);
        }

        let mode = if entity.is_new() {
            WriteMode::Create
        } else {
            WriteMode::Update
        };
        let body = Value::Object(entity.to_wire());
        let stored = self.transport.save(&self.url(entity), mode, body).await?;
        entity.apply_wire(stored)?;
        info!("saved {} {:?}", entity.kind(), entity.identity());
        Ok(WriteOutcome::Completed)
    }

    /// Deletes `entity` at its derived URL. Read-only kinds return
    /// [`WriteOutcome::NotPermitted`]; unsaved entities return
    /// [`WriteOutcome::Unsaved`]. Neither reaches the network.
    pub async fn delete(&self, entity: &Entity) -> ClientResult<WriteOutcome> {
        if entity.is_read_only() {
            debug!("refusing to delete read-only {}", entity.kind());
            return Ok(WriteOutcome::NotPermitted);
        }
        if entity.is_new() {
            return Ok(WriteOutcome::Unsaved);
        }
        self.transport.delete(&self.url(entity)).await?;
        info!("deleted {} {:?}", entity.kind(), entity.identity());
        Ok(WriteOutcome::Completed)
    }

    /// Resolves the parent of `entity` without waiting.
    ///
    /// `collection` is the collection `entity` belongs to, if any. When the
    /// parent is not resident a fetch is spawned on the current Tokio
    /// runtime and the placeholder is handed back at once.
    pub fn parent<C>(&self, entity: &Entity, collection: Option<&C>) -> ClientResult<Parent>
    where
        C: Collection + ?Sized,
    {
        match entity.parent_lookup(collection) {
            ParentLookup::None => Ok(Parent::None),
            ParentLookup::Resident(found) => Ok(Parent::Resident(found.cloned())),
            ParentLookup::Fetch(placeholder) => {
                let url = self.url(&placeholder);
                let runtime =
                    Handle::try_current().map_err(|_| ClientError::NoRuntime(url.clone()))?;
                debug!("parent not resident, fetching {}", url);

                let transport = Arc::clone(&self.transport);
                let mut target = placeholder.clone();
                let handle = runtime.spawn(async move {
                    let body = transport.fetch(&url).await?;
                    target.apply_wire(body)?;
                    Ok::<_, ClientError>(target)
                });
                Ok(Parent::Pending(PendingParent {
                    placeholder,
                    handle,
                }))
            }
        }
    }
}
