use shared_types::RoleGrant;

/// Distinct organization ids a grant list touches, in first-seen order.
///
/// An organization-scoped grant's collection path has the shape
/// `organizations-<id>[-...]`; the id is the second `-` segment. Grants
/// against other scopes are skipped.
pub fn organization_ids(grants: &[RoleGrant]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for grant in grants {
        let mut segments = grant.collection_path.split('-');
        if segments.next() != Some("organizations") {
            continue;
        }
        if let Some(id) = segments.next() {
            if !id.is_empty() && ids.iter().all(|existing| existing != id) {
                ids.push(id.to_string());
            }
        }
    }
    ids
}
