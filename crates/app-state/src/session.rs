use crate::{menu_icon, organizations, roles};
use shared_types::{AppConfig, RoleGrant, RoleTemplate};

/// Per-session shell around the pure rule components.
///
/// Owns the current organization identity and the immutable startup
/// configuration (role catalog, admin scope paths, navigation forest).
/// Matching always reads the identity at call time, so switching
/// organizations changes future answers without re-deriving anything.
/// Read by a single logical actor; no interior mutability, no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: AppConfig,
    current_organization: String,
    organization_doc_path: String,
}

impl Session {
    /// A session with no organization selected. Role and admin queries
    /// resolve negatively until `set_organization` is called.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            current_organization: String::new(),
            organization_doc_path: String::new(),
        }
    }

    /// Switch the acting organization. Empty ids are ignored. The derived
    /// document path is recomputed from the id so the two cannot diverge
    /// mid-switch.
    pub fn set_organization(&mut self, org_id: &str) {
        if org_id.is_empty() {
            return;
        }
        self.current_organization = org_id.to_string();
        self.organization_doc_path = format!("organizations/{org_id}");
        tracing::info!(organization = %org_id, "switched organization");
    }

    /// Reset the organization identity (logout-time state reset). The
    /// configuration survives; the I/O half of logout belongs to the host.
    pub fn clear(&mut self) {
        self.current_organization.clear();
        self.organization_doc_path.clear();
    }

    pub fn current_organization(&self) -> &str {
        &self.current_organization
    }

    pub fn organization_doc_path(&self) -> &str {
        &self.organization_doc_path
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The role catalog rewritten for the current organization.
    pub fn role_templates(&self) -> Vec<RoleTemplate> {
        roles::templates_for_organization(&self.current_organization, &self.config.role_templates)
    }

    /// Catalog label for a user's grants in the current organization.
    pub fn role_name(&self, grants: &[RoleGrant]) -> String {
        roles::match_role_name(grants, &self.current_organization, &self.config.role_templates)
    }

    /// Whether the grants carry admin rights in the current organization.
    /// The organization comparison path is synthesized from the id at call
    /// time; the tracked doc path is display state and never consulted.
    pub fn is_admin(&self, grants: &[RoleGrant]) -> bool {
        roles::is_admin(
            grants,
            &self.current_organization,
            &self.config.admin_collections,
        )
    }

    /// Navigation icon for the given route path.
    pub fn route_icon(&self, current_path: &str) -> String {
        menu_icon::icon_for_route(current_path, &self.config.menu, &self.config.default_icon)
    }

    /// Organizations the user could switch into, from their grant list.
    pub fn available_organizations(&self, grants: &[RoleGrant]) -> Vec<String> {
        organizations::organization_ids(grants)
    }
}
