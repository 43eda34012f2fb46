//! Contract to the external product store collaborator.
//!
//! The kernel never talks to a store directly; it queues
//! [`StoreRequest`](crate::catalog::StoreRequest) values that the
//! [`DispatchBridge`] executes against an implementation of
//! [`CatalogStore`]. Re-rendering after an external mutation is an explicit
//! observer contract: every successful mutation bumps the version published
//! through [`CatalogStore::subscribe`].

mod bridge;
mod memory;

pub use bridge::BridgeReport;
pub use bridge::DispatchBridge;
pub use memory::MemoryStore;

use crate::catalog::Product;
use crate::catalog::ProductFields;
use crate::catalog::ProductId;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum StoreError {
    #[error("no product with id {0}")]
    NotFound(ProductId),
    #[error("store rejected the request: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The four operations the screen dispatches, plus the change subscription.
/// Persistence, transport and retries all live behind this trait.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Creates a record from the field payload; the store assigns the id.
    async fn add_product(&self, fields: ProductFields) -> Result<Product, StoreError>;

    async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, StoreError>;

    /// The human-readable name travels with the id, per the store contract.
    async fn delete_product(&self, id: ProductId, name: &str) -> Result<(), StoreError>;

    /// Collection-change notifications: the published value bumps on every
    /// successful mutation. Receivers reload the collection when it fires.
    fn subscribe(&self) -> watch::Receiver<u64>;
}
