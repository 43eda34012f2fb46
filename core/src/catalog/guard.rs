use crate::catalog::action::CatalogAction;
use crate::catalog::action::CatalogActionId;
use crate::catalog::policy::is_action_allowed;
use crate::catalog::role::Role;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Snapshot of mutable state relevant for guard decisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuardContext {
    pub role: Role,
    pub editor_open: bool,
    pub editor_read_only: bool,
    pub has_target_row: bool,
}

/// Validates actions before the kernel applies them. The role policy already
/// hides forbidden controls; the guard backs that up so a forbidden action
/// is rejected no matter how it was produced.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct ActionGuard;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message")]
pub enum GuardError {
    #[error("role '{role}' cannot invoke action '{action}'")]
    RoleDenied { role: Role, action: CatalogActionId },
    #[error("action '{0}' requires a table row")]
    NoRowSelected(CatalogActionId),
    #[error("action '{0}' requires an open editor")]
    EditorClosed(CatalogActionId),
    #[error("action '{0}' blocked while the editor is open")]
    EditorOpen(CatalogActionId),
    #[error("the editor session is read-only")]
    ReadOnlySession,
}

impl ActionGuard {
    pub fn validate(&self, action: &CatalogAction, ctx: GuardContext) -> Result<(), GuardError> {
        let action_id = action.id();
        match action {
            CatalogAction::OpenCreate => {
                if ctx.editor_open {
                    return Err(GuardError::EditorOpen(action_id));
                }
            }
            CatalogAction::OpenView { .. } | CatalogAction::OpenUpdate { .. } => {
                if ctx.editor_open {
                    return Err(GuardError::EditorOpen(action_id));
                }
                if !ctx.has_target_row {
                    return Err(GuardError::NoRowSelected(action_id));
                }
            }
            CatalogAction::DeleteRecord { .. } => {
                if !ctx.has_target_row {
                    return Err(GuardError::NoRowSelected(action_id));
                }
            }
            CatalogAction::SubmitRecord => {
                if !ctx.editor_open {
                    return Err(GuardError::EditorClosed(action_id));
                }
                if ctx.editor_read_only {
                    return Err(GuardError::ReadOnlySession);
                }
            }
            CatalogAction::CloseEditor => {
                if !ctx.editor_open {
                    return Err(GuardError::EditorClosed(action_id));
                }
            }
            CatalogAction::SelectNextRow
            | CatalogAction::SelectPrevRow
            | CatalogAction::ReloadCatalog => {}
        }
        if !is_action_allowed(ctx.role, action_id) {
            return Err(GuardError::RoleDenied {
                role: ctx.role,
                action: action_id,
            });
        }
        Ok(())
    }
}
