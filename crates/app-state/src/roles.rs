//! Organization-scoped role resolution: rewriting the catalog for one
//! organization, labeling a user's grants with a catalog template name,
//! and resolving administrative rights.

use shared_types::{
    normalize_scope, organization_collection_path, RoleGrant, RoleTemplate, ADMIN_ROLE,
    UNKNOWN_ROLE_NAME,
};

/// Produce a copy of the catalog with every placeholder grant path
/// rewritten for `org_id`. The input catalog is configuration and is
/// never mutated; an empty catalog yields an empty result.
pub fn templates_for_organization(org_id: &str, catalog: &[RoleTemplate]) -> Vec<RoleTemplate> {
    catalog
        .iter()
        .map(|template| template.substituted(org_id))
        .collect()
}

/// Label a user's grants with the name of the first catalog template (in
/// catalog order) whose every required grant is present in `user_grants`.
///
/// This is a subset check: extra grants the template does not mention are
/// ignored, so a user holding broader permissions still matches a narrower
/// template. No match returns the `"Unknown"` sentinel.
pub fn match_role_name(user_grants: &[RoleGrant], org_id: &str, catalog: &[RoleTemplate]) -> String {
    for template in templates_for_organization(org_id, catalog) {
        let matched = template.roles.iter().all(|required| {
            user_grants.iter().any(|grant| {
                grant.collection_path == required.collection_path && grant.role == required.role
            })
        });
        if matched {
            return template.name;
        }
    }
    UNKNOWN_ROLE_NAME.to_string()
}

/// True iff some grant holds the exact role `"admin"` against one of the
/// configured admin scope paths or against the current organization's own
/// collection path (synthesized from `org_id` at call time).
///
/// Comparison is exact, case-sensitive string equality on both sides after
/// `/`-to-`-` normalization. Empty grants resolve to false.
pub fn is_admin(user_grants: &[RoleGrant], org_id: &str, admin_collections: &[String]) -> bool {
    let mut compares: Vec<String> = admin_collections
        .iter()
        .map(|path| normalize_scope(path))
        .collect();
    compares.push(organization_collection_path(org_id));
    tracing::debug!(paths = ?compares, "admin comparison paths");

    compares.iter().any(|compare| {
        user_grants
            .iter()
            .any(|grant| grant.collection_path == *compare && grant.role == ADMIN_ROLE)
    })
}
