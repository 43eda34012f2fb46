//! Reference in-memory store used by the demo binary and the test suite.

use crate::catalog::Product;
use crate::catalog::ProductFields;
use crate::catalog::ProductId;
use crate::store::CatalogStore;
use crate::store::StoreError;
use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::Mutex;
use tokio::sync::watch;

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

/// Keeps the collection under a `tokio` mutex and publishes a version bump
/// on every successful mutation. Ids are sequential and never reused.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    version: watch::Sender<u64>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.0 + 1).max().unwrap_or(1);
        let (version, _) = watch::channel(0);
        Self {
            inner: Mutex::new(Inner { products, next_id }),
            version,
        }
    }

    /// Loads a JSON array of products, e.g. a demo seed file.
    pub fn from_seed_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))?;
        Ok(Self::with_products(products))
    }

    fn bump(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.lock().await.products.clone())
    }

    async fn add_product(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = ProductId(inner.next_id);
        inner.next_id += 1;
        let product = fields.into_product(id);
        inner.products.push(product.clone());
        drop(inner);
        tracing::info!(id = %product.id, name = %product.name, "product created");
        self.bump();
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(slot) = inner.products.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        *slot = fields.into_product(id);
        let updated = slot.clone();
        drop(inner);
        tracing::info!(id = %updated.id, name = %updated.name, "product updated");
        self.bump();
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId, name: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(StoreError::NotFound(id));
        }
        drop(inner);
        tracing::info!(id = %id, name = %name, "product deleted");
        self.bump();
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            category: "Tools".to_string(),
            price: "10".to_string(),
            quantity: "5".to_string(),
        }
    }

    #[tokio::test]
    async fn add_assigns_fresh_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.add_product(fields("Widget")).await.expect("add");
        let second = store.add_product(fields("Gadget")).await.expect("add");
        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
        assert_eq!(store.get_products().await.expect("get").len(), 2);
    }

    #[tokio::test]
    async fn ids_continue_after_seeded_records() {
        let store = MemoryStore::with_products(vec![fields("Widget").into_product(ProductId(7))]);
        let added = store.add_product(fields("Gadget")).await.expect("add");
        assert_eq!(added.id, ProductId(8));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = MemoryStore::with_products(vec![fields("Widget").into_product(ProductId(7))]);
        let mut changed = fields("Widget");
        changed.price = "12".to_string();
        let updated = store
            .update_product(ProductId(7), changed)
            .await
            .expect("update");
        assert_eq!(updated.id, ProductId(7));
        assert_eq!(updated.price, "12");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_product(ProductId(41), fields("Widget"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(ProductId(41)));
        let err = store.delete_product(ProductId(41), "Widget").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(ProductId(41)));
    }

    #[tokio::test]
    async fn mutations_bump_the_subscription_version() {
        let store = MemoryStore::new();
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), 0);

        let added = store.add_product(fields("Widget")).await.expect("add");
        assert_eq!(*rx.borrow(), 1);

        store
            .update_product(added.id, fields("Widget"))
            .await
            .expect("update");
        assert_eq!(*rx.borrow(), 2);

        store
            .delete_product(added.id, &added.name)
            .await
            .expect("delete");
        assert_eq!(*rx.borrow(), 3);

        // A failed mutation publishes nothing.
        let _ = store.delete_product(added.id, &added.name).await;
        assert_eq!(*rx.borrow(), 3);
    }
}
