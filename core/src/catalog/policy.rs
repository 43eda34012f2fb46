//! Role policy for the catalog screen.
//!
//! The policy is consulted twice: once when building snapshots, so the table
//! only offers permitted actions, and once inside the guard, so a forbidden
//! action is rejected even if a front-end offers it anyway.

use crate::catalog::action::CatalogActionId;
use crate::catalog::role::Role;
use serde::Deserialize;
use serde::Serialize;

/// The set of UI capabilities a role grants. Viewing is unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCapabilities {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Maps a role to its capability set. Pure, no error cases: role parsing
/// already collapsed anything unrecognized into [`Role::Viewer`].
#[must_use]
pub fn capabilities(role: Role) -> RoleCapabilities {
    RoleCapabilities {
        can_view: true,
        can_create: role != Role::Viewer,
        can_edit: role != Role::Viewer,
        can_delete: role == Role::Admin,
    }
}

/// Returns `true` when the given role is permitted to invoke the specified
/// catalog action.
#[must_use]
pub fn is_action_allowed(role: Role, action: CatalogActionId) -> bool {
    match role {
        Role::Admin => true,
        Role::Editor => !matches!(action, CatalogActionId::DeleteRecord),
        Role::Viewer => matches!(
            action,
            CatalogActionId::SelectNextRow
                | CatalogActionId::SelectPrevRow
                | CatalogActionId::OpenView
                | CatalogActionId::CloseEditor
                | CatalogActionId::ReloadCatalog
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_gets_view_only_capabilities() {
        let caps = capabilities(Role::Viewer);
        assert!(caps.can_view);
        assert!(!caps.can_create);
        assert!(!caps.can_edit);
        assert!(!caps.can_delete);
    }

    #[test]
    fn admin_gets_everything() {
        let caps = capabilities(Role::Admin);
        assert!(caps.can_view && caps.can_create && caps.can_edit && caps.can_delete);
    }

    #[test]
    fn editor_cannot_delete() {
        let caps = capabilities(Role::Editor);
        assert!(caps.can_create && caps.can_edit);
        assert!(!caps.can_delete);
        assert!(!is_action_allowed(Role::Editor, CatalogActionId::DeleteRecord));
    }

    #[test]
    fn viewer_blocked_from_mutating_actions() {
        assert!(!is_action_allowed(Role::Viewer, CatalogActionId::OpenCreate));
        assert!(!is_action_allowed(Role::Viewer, CatalogActionId::OpenUpdate));
        assert!(!is_action_allowed(Role::Viewer, CatalogActionId::SubmitRecord));
        assert!(is_action_allowed(Role::Viewer, CatalogActionId::OpenView));
    }
}
