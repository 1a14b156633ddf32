//! In-process gateway implementation
//!
//! Backs the document store contract with a `DashMap` and a broadcast
//! channel, for tests and single-process demos. Every change notification
//! makes each matching subscription re-read and deliver the full current
//! snapshot, so a lagged receiver only costs a redundant (idempotent)
//! snapshot, never a lost update.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{Collection, DocId, GatewayError, SubscribeTarget, Subscription, SyncGateway};

/// In-process document store
#[derive(Debug, Clone)]
pub struct MemoryGateway {
    /// Documents keyed by `collection/id`
    docs: Arc<DashMap<String, Value>>,
    /// Change notifications, one per write, carrying the touched collection
    change_tx: broadcast::Sender<Collection>,
    shutdown: CancellationToken,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// `capacity` bounds the change-notification backlog per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (change_tx, _) = broadcast::channel(capacity);
        Self {
            docs: Arc::new(DashMap::new()),
            change_tx,
            shutdown: CancellationToken::new(),
        }
    }

    /// Stop all subscriptions; subsequent writes still mutate the map but
    /// notify nobody.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn snapshot(&self, target: &SubscribeTarget) -> Value {
        match target {
            SubscribeTarget::Collection(collection) => {
                let prefix = format!("{collection}/");
                let mut entries: Vec<(String, Value)> = self
                    .docs
                    .iter()
                    .filter(|e| e.key().starts_with(&prefix))
                    .map(|e| (e.key().clone(), e.value().clone()))
                    .collect();
                // Stable order so repeated snapshots of unchanged data
                // compare equal.
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                Value::Array(entries.into_iter().map(|(_, v)| v).collect())
            }
            SubscribeTarget::Document(id) => self
                .docs
                .get(&id.key())
                .map(|e| e.value().clone())
                .unwrap_or(Value::Null),
        }
    }

    fn notify(&self, collection: Collection) {
        // A send error only means no subscriber is currently listening.
        let _ = self.change_tx.send(collection);
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SyncGateway for MemoryGateway {
    async fn subscribe(&self, target: SubscribeTarget) -> Result<Subscription, GatewayError> {
        if self.shutdown.is_cancelled() {
            return Err(GatewayError::Closed);
        }

        let (tx, rx) = mpsc::channel(16);
        let token = self.shutdown.child_token();
        let watched = target.collection();
        let mut change_rx = self.change_tx.subscribe();
        let gateway = self.clone();
        let task_token = token.clone();

        tokio::spawn(async move {
            // Initial snapshot fires before any change can be observed.
            if tx.send(gateway.snapshot(&target)).await.is_err() {
                return;
            }

            loop {
                tokio::select! {
                    // Checked first so a cancelled subscription never
                    // delivers another snapshot.
                    biased;
                    _ = task_token.cancelled() => break,
                    changed = change_rx.recv() => {
                        let deliver = match changed {
                            Ok(collection) => collection == watched,
                            // Lagged: we missed notifications, but the next
                            // snapshot carries the latest state anyway.
                            Err(broadcast::error::RecvError::Lagged(_)) => true,
                            Err(broadcast::error::RecvError::Closed) => break,
                        };
                        if deliver && tx.send(gateway.snapshot(&target)).await.is_err() {
                            break;
                        }
                    }
                }
            }
            debug!(collection = %watched, "subscription closed");
        });

        Ok(Subscription::new(rx, token))
    }

    async fn write_document(
        &self,
        id: &DocId,
        value: Value,
        merge: bool,
    ) -> Result<(), GatewayError> {
        let key = id.key();
        if merge {
            let mut entry = self.docs.entry(key).or_insert(Value::Null);
            match (entry.value_mut(), value) {
                (Value::Object(existing), Value::Object(incoming)) => {
                    for (k, v) in incoming {
                        existing.insert(k, v);
                    }
                }
                (slot, incoming) => *slot = incoming,
            }
        } else {
            self.docs.insert(key, value);
        }
        self.notify(id.collection);
        Ok(())
    }

    async fn delete_document(&self, id: &DocId) -> Result<(), GatewayError> {
        self.docs.remove(&id.key());
        self.notify(id.collection);
        Ok(())
    }
}
