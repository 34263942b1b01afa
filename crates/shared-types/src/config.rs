use crate::{AppError, MenuItem, RoleTemplate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_icon() -> String {
    "LayoutDashboard".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Loaded once at startup and treated as immutable afterwards: the role
/// catalog, admin scope paths, and navigation forest are configuration,
/// never mutated by the rule layer. Every section defaults to empty so a
/// missing or incomplete file degrades to a config that matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Ordered role-template catalog; catalog order is the tie-break when
    /// several templates match a user's grants.
    #[serde(default)]
    pub role_templates: Vec<RoleTemplate>,
    /// Scope paths (beyond the current organization's own path) whose
    /// `admin` role grants administrative rights.
    #[serde(default)]
    pub admin_collections: Vec<String>,
    /// Navigation forest used for route-to-icon resolution.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    /// Icon used when no menu entry matches the current route.
    #[serde(default = "default_icon")]
    pub default_icon: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            role_templates: Vec::new(),
            admin_collections: Vec::new(),
            menu: Vec::new(),
            default_icon: default_icon(),
        }
    }
}

impl AppConfig {
    /// Check the shape the rule layer assumes: named templates with at
    /// least one fully specified grant, non-empty admin paths, non-empty
    /// menu paths. Run once at load time; the matchers themselves never
    /// re-validate.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();

        for (i, template) in self.role_templates.iter().enumerate() {
            if template.name.trim().is_empty() {
                field_errors.insert(
                    format!("role_templates[{i}].name"),
                    "Template name is required.".to_string(),
                );
            }
            if template.roles.is_empty() {
                field_errors.insert(
                    format!("role_templates[{i}].roles"),
                    "A template must require at least one grant.".to_string(),
                );
            }
            for (j, grant) in template.roles.iter().enumerate() {
                if grant.collection_path.trim().is_empty() {
                    field_errors.insert(
                        format!("role_templates[{i}].roles[{j}].collection_path"),
                        "Grant collection path is required.".to_string(),
                    );
                }
                if grant.role.trim().is_empty() {
                    field_errors.insert(
                        format!("role_templates[{i}].roles[{j}].role"),
                        "Grant role is required.".to_string(),
                    );
                }
            }
        }

        for (i, path) in self.admin_collections.iter().enumerate() {
            if path.trim().is_empty() {
                field_errors.insert(
                    format!("admin_collections[{i}]"),
                    "Admin collection path is required.".to_string(),
                );
            }
        }

        for (i, item) in self.menu.iter().enumerate() {
            if item.path.trim().is_empty() {
                field_errors.insert(
                    format!("menu[{i}].path"),
                    "Menu path is required.".to_string(),
                );
            }
            for (j, sub) in item.submenu.iter().enumerate() {
                if sub.path.trim().is_empty() {
                    field_errors.insert(
                        format!("menu[{i}].submenu[{j}].path"),
                        "Submenu path is required.".to_string(),
                    );
                }
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Invalid application config", field_errors))
        }
    }
}
