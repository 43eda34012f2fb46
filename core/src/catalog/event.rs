use crate::catalog::record::ProductFields;
use crate::catalog::record::ProductId;
use serde::Deserialize;
use serde::Serialize;

/// Requests the kernel wants issued against the product store. The dispatch
/// bridge drains these after each applied action and executes them
/// fire-and-forget; the kernel never awaits their completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StoreRequest {
    /// Fetch the full collection. Issued once on first display and on
    /// explicit reloads.
    LoadCatalog,
    Create {
        fields: ProductFields,
    },
    Update {
        id: ProductId,
        fields: ProductFields,
    },
    /// Delete carries the human-readable name along with the id, matching
    /// the store's contract.
    Delete {
        id: ProductId,
        name: String,
    },
}
