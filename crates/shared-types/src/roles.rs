use serde::{Deserialize, Serialize};

/// Placeholder segment used in catalog templates. Replaced with the
/// concrete organization collection path (`organizations-<id>`) before any
/// comparison against a user's actual grants.
pub const ORG_PATH_PLACEHOLDER: &str = "organizationDocPath";

/// The role label that carries administrative rights. Matching is exact
/// and case-sensitive.
pub const ADMIN_ROLE: &str = "admin";

/// Sentinel returned when no catalog template matches a user's grants.
pub const UNKNOWN_ROLE_NAME: &str = "Unknown";

/// A single scoped permission grant: a role held against one collection
/// path. Supplied by the identity provider; this layer only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub collection_path: String,
    pub role: String,
}

impl RoleGrant {
    pub fn new(collection_path: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            collection_path: collection_path.into(),
            role: role.into(),
        }
    }
}

/// A named bundle of required grants from the role catalog. A user is
/// labeled with the template's `name` when every grant in `roles` is
/// present among their actual grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTemplate {
    pub name: String,
    pub roles: Vec<RoleGrant>,
}

impl RoleTemplate {
    /// Rewrite every placeholder occurrence in this template's grant paths
    /// with the collection path for `org_id`. Applied uniformly to all
    /// grants; a template is never left partially substituted.
    pub fn substituted(&self, org_id: &str) -> Self {
        let org_path = organization_collection_path(org_id);
        Self {
            name: self.name.clone(),
            roles: self
                .roles
                .iter()
                .map(|grant| RoleGrant {
                    collection_path: grant
                        .collection_path
                        .replace(ORG_PATH_PLACEHOLDER, &org_path),
                    role: grant.role.clone(),
                })
                .collect(),
        }
    }
}

/// Normalize a scope identifier for comparison: `/` becomes `-`, so a
/// document path (`organizations/abc`) and the collection path it grants
/// against (`organizations-abc`) compare equal. Must be applied to both
/// sides of every comparison or matches silently fail.
pub fn normalize_scope(id: &str) -> String {
    id.replace('/', "-")
}

/// Collection path a role grant uses to scope to one organization.
pub fn organization_collection_path(org_id: &str) -> String {
    format!("organizations-{}", normalize_scope(org_id))
}
