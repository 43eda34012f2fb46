use crate::catalog::record::ProductId;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Identifier for high-level catalog actions. These strings are stable so
/// that keymaps and logs can rely on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogActionId {
    #[serde(rename = "catalog.table.next_row")]
    SelectNextRow,
    #[serde(rename = "catalog.table.prev_row")]
    SelectPrevRow,
    #[serde(rename = "catalog.table.reload")]
    ReloadCatalog,
    #[serde(rename = "catalog.table.delete")]
    DeleteRecord,
    #[serde(rename = "catalog.editor.open_create")]
    OpenCreate,
    #[serde(rename = "catalog.editor.open_view")]
    OpenView,
    #[serde(rename = "catalog.editor.open_update")]
    OpenUpdate,
    #[serde(rename = "catalog.editor.submit")]
    SubmitRecord,
    #[serde(rename = "catalog.editor.close")]
    CloseEditor,
}

impl CatalogActionId {
    pub const fn as_str(self) -> &'static str {
        match self {
            CatalogActionId::SelectNextRow => "catalog.table.next_row",
            CatalogActionId::SelectPrevRow => "catalog.table.prev_row",
            CatalogActionId::ReloadCatalog => "catalog.table.reload",
            CatalogActionId::DeleteRecord => "catalog.table.delete",
            CatalogActionId::OpenCreate => "catalog.editor.open_create",
            CatalogActionId::OpenView => "catalog.editor.open_view",
            CatalogActionId::OpenUpdate => "catalog.editor.open_update",
            CatalogActionId::SubmitRecord => "catalog.editor.submit",
            CatalogActionId::CloseEditor => "catalog.editor.close",
        }
    }
}

impl fmt::Display for CatalogActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete action invocation possibly carrying additional payload. Row
/// actions default to the current table selection when `product_id` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "id", content = "payload", rename_all = "kebab-case")]
pub enum CatalogAction {
    #[serde(rename = "catalog.table.next_row")]
    SelectNextRow,
    #[serde(rename = "catalog.table.prev_row")]
    SelectPrevRow,
    #[serde(rename = "catalog.table.reload")]
    ReloadCatalog,
    #[serde(rename = "catalog.table.delete")]
    DeleteRecord { product_id: Option<ProductId> },
    #[serde(rename = "catalog.editor.open_create")]
    OpenCreate,
    #[serde(rename = "catalog.editor.open_view")]
    OpenView { product_id: Option<ProductId> },
    #[serde(rename = "catalog.editor.open_update")]
    OpenUpdate { product_id: Option<ProductId> },
    #[serde(rename = "catalog.editor.submit")]
    SubmitRecord,
    #[serde(rename = "catalog.editor.close")]
    CloseEditor,
}

impl CatalogAction {
    pub fn id(&self) -> CatalogActionId {
        match self {
            CatalogAction::SelectNextRow => CatalogActionId::SelectNextRow,
            CatalogAction::SelectPrevRow => CatalogActionId::SelectPrevRow,
            CatalogAction::ReloadCatalog => CatalogActionId::ReloadCatalog,
            CatalogAction::DeleteRecord { .. } => CatalogActionId::DeleteRecord,
            CatalogAction::OpenCreate => CatalogActionId::OpenCreate,
            CatalogAction::OpenView { .. } => CatalogActionId::OpenView,
            CatalogAction::OpenUpdate { .. } => CatalogActionId::OpenUpdate,
            CatalogAction::SubmitRecord => CatalogActionId::SubmitRecord,
            CatalogAction::CloseEditor => CatalogActionId::CloseEditor,
        }
    }
}
