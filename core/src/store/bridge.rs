//! Dispatch bridge between the kernel and the store collaborator.

use crate::catalog::Product;
use crate::catalog::StoreRequest;
use crate::store::CatalogStore;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Feedback the bridge sends back to the screen. Loads return the fetched
/// collection; failed mutations become a status line. There is no success
/// report for mutations: the store's change subscription covers that path.
#[derive(Debug, Clone)]
pub enum BridgeReport {
    CatalogLoaded(Vec<Product>),
    OperationFailed(String),
}

/// Executes kernel requests fire-and-forget on the tokio runtime. No retry
/// and no sequencing: each request is one spawned task, per the screen's
/// one-operation-per-user-action model.
pub struct DispatchBridge {
    store: Arc<dyn CatalogStore>,
    reports: UnboundedSender<BridgeReport>,
}

impl DispatchBridge {
    pub fn new(store: Arc<dyn CatalogStore>, reports: UnboundedSender<BridgeReport>) -> Self {
        Self { store, reports }
    }

    pub fn dispatch_all(&self, requests: Vec<StoreRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    pub fn dispatch(&self, request: StoreRequest) {
        let store = self.store.clone();
        let reports = self.reports.clone();
        tokio::spawn(async move {
            match request {
                StoreRequest::LoadCatalog => match store.get_products().await {
                    Ok(products) => {
                        let _ = reports.send(BridgeReport::CatalogLoaded(products));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "catalog load failed");
                        let _ = reports.send(BridgeReport::OperationFailed(format!(
                            "Load failed: {err}"
                        )));
                    }
                },
                StoreRequest::Create { fields } => {
                    if let Err(err) = store.add_product(fields).await {
                        tracing::warn!(error = %err, "create failed");
                        let _ = reports.send(BridgeReport::OperationFailed(format!(
                            "Create failed: {err}"
                        )));
                    }
                }
                StoreRequest::Update { id, fields } => {
                    if let Err(err) = store.update_product(id, fields).await {
                        tracing::warn!(error = %err, %id, "update failed");
                        let _ = reports.send(BridgeReport::OperationFailed(format!(
                            "Update failed: {err}"
                        )));
                    }
                }
                StoreRequest::Delete { id, name } => {
                    if let Err(err) = store.delete_product(id, &name).await {
                        tracing::warn!(error = %err, %id, "delete failed");
                        let _ = reports.send(BridgeReport::OperationFailed(format!(
                            "Delete failed: {err}"
                        )));
                    }
                }
            }
        });
    }
}
