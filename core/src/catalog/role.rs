use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Roles recognized by the catalog screen. The role is supplied by the host
/// application and is read-only to the kernel; it drives which table and
/// editor actions are offered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Default for Role {
    fn default() -> Self {
        Role::Editor
    }
}

impl Role {
    /// Parses an externally supplied role label. Unrecognized labels fall
    /// back to the most restrictive role so a misconfigured host fails safe.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "editor" | "default" => Role::Editor,
            _ => Role::Viewer,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_fall_back_to_viewer() {
        assert_eq!(Role::from_label("superuser"), Role::Viewer);
        assert_eq!(Role::from_label(""), Role::Viewer);
    }

    #[test]
    fn known_labels_parse_case_insensitively() {
        assert_eq!(Role::from_label("Admin"), Role::Admin);
        assert_eq!(Role::from_label(" editor "), Role::Editor);
        assert_eq!(Role::from_label("default"), Role::Editor);
        assert_eq!(Role::from_label("viewer"), Role::Viewer);
    }
}
