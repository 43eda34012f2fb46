use crate::catalog::form::FieldId;
use crate::catalog::policy::RoleCapabilities;
use crate::catalog::record::ProductId;
use crate::catalog::role::Role;
use crate::catalog::session::EditorMode;
use serde::Deserialize;
use serde::Serialize;

/// Per-row actions the current role may invoke. Computed once per snapshot
/// so views never consult the policy themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const fn label(self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub field: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub read_only: bool,
    pub focused: bool,
    pub issue: Option<String>,
}

/// Render model for the open modal. `show_footer` is false in View mode:
/// display-only sessions have no submit or cancel controls.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub title: String,
    pub read_only: bool,
    pub fields: Vec<FieldSnapshot>,
    pub show_footer: bool,
    pub submit_label: &'static str,
}

/// Everything a front-end needs to render the catalog screen.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenSnapshot {
    pub role: Role,
    pub capabilities: RoleCapabilities,
    pub rows: Vec<RowSnapshot>,
    pub selected_row: Option<usize>,
    pub editor: Option<EditorSnapshot>,
    pub status_messages: Vec<String>,
    pub loaded: bool,
}
