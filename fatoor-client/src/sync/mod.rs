//! Sync gateway
//!
//! The only boundary the core depends on: an external hosted document
//! store with subscribe/write primitives. A subscription yields the full
//! current value immediately, then again on every change, and never
//! completes on its own. Writes are whole-document replaces (optionally a
//! shallow merge) with **last-write-wins** conflict semantics: no version
//! check, no merge of concurrent edits. That is an accepted limitation of
//! the design, not a bug; the ledger and ballot transitions are structured
//! as whole-document replaces because of it.

mod memory;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub use memory::MemoryGateway;

/// Document collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Restaurants,
    Polls,
    /// One order document per restaurant, keyed by restaurant id
    Orders,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Restaurants => "restaurants",
            Self::Polls => "polls",
            Self::Orders => "orders",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-qualified document id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocId {
    pub collection: Collection,
    pub id: String,
}

impl DocId {
    pub fn new(collection: Collection, id: impl Into<String>) -> Self {
        Self {
            collection,
            id: id.into(),
        }
    }

    /// Store key, e.g. `orders/rest-17565-a1`
    pub fn key(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

/// What a subscription watches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeTarget {
    /// All documents of a collection, delivered as a JSON array
    Collection(Collection),
    /// A single document, delivered as its value or `null` when absent
    Document(DocId),
}

impl SubscribeTarget {
    pub fn collection(&self) -> Collection {
        match self {
            Self::Collection(c) => *c,
            Self::Document(id) => id.collection,
        }
    }
}

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The store rejected or could not be reached; never retried here
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("gateway is closed")]
    Closed,

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GatewayError> for shared::AppError {
    fn from(err: GatewayError) -> Self {
        shared::AppError::transport(err.to_string())
    }
}

/// Live feed of full snapshots for one subscribe target.
///
/// Delivery stops when the subscription is dropped or cancelled; the
/// guaranteed-cleanup contract the state container relies on for view
/// teardown.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::Receiver<Value>,
    token: CancellationToken,
}

impl Subscription {
    pub(crate) fn new(rx: mpsc::Receiver<Value>, token: CancellationToken) -> Self {
        Self { rx, token }
    }

    /// Next full snapshot; `None` once the subscription is cancelled or
    /// the gateway goes away.
    pub async fn next(&mut self) -> Option<Value> {
        self.rx.recv().await
    }

    /// Stop receiving updates. Idempotent; also triggered by drop.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// External document store contract
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Open a live feed. Fires once immediately with the current value
    /// (or empty/default when absent), then on every external change.
    async fn subscribe(&self, target: SubscribeTarget) -> Result<Subscription, GatewayError>;

    /// Replace a document, or shallow-merge into it when `merge` is true.
    /// Resolves on acknowledgement.
    async fn write_document(
        &self,
        id: &DocId,
        value: Value,
        merge: bool,
    ) -> Result<(), GatewayError>;

    /// Unconditional whole-document write
    async fn create_or_replace_document(
        &self,
        id: &DocId,
        value: Value,
    ) -> Result<(), GatewayError> {
        self.write_document(id, value, false).await
    }

    /// Remove a document; absent documents are not an error
    async fn delete_document(&self, id: &DocId) -> Result<(), GatewayError>;
}
