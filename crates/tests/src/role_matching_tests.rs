use crate::common;
use app_state::roles;
use pretty_assertions::assert_eq;

#[test]
fn matched_template_grants_are_all_present_in_user_grants() {
    // Soundness: whenever a template name comes back, every substituted
    // grant of that template is in the user's grant list.
    let config = common::test_config();
    let grants = vec![
        common::grant("organizations-acme", "user"),
        common::grant("organizations-acme-projects", "admin"),
    ];

    let name = roles::match_role_name(&grants, "acme", &config.role_templates);
    let matched = roles::templates_for_organization("acme", &config.role_templates)
        .into_iter()
        .find(|t| t.name == name)
        .expect("a catalog template must have matched");

    for required in &matched.roles {
        assert!(
            grants.iter().any(|g| g == required),
            "matched template requires {required:?} which the user does not hold"
        );
    }
}

#[test]
fn first_match_wins_over_later_templates() {
    // These grants satisfy both Manager and Member; Manager is listed
    // first in the catalog and must win.
    let config = common::test_config();
    let grants = vec![
        common::grant("organizations-acme", "user"),
        common::grant("organizations-acme-projects", "admin"),
    ];
    assert_eq!(
        roles::match_role_name(&grants, "acme", &config.role_templates),
        "Manager"
    );
}

#[test]
fn no_matching_template_returns_unknown() {
    let config = common::test_config();
    let grants = vec![common::grant("organizations-acme", "viewer")];
    assert_eq!(
        roles::match_role_name(&grants, "acme", &config.role_templates),
        "Unknown"
    );
    assert_eq!(
        roles::match_role_name(&[], "acme", &config.role_templates),
        "Unknown"
    );
}

#[test]
fn substitution_is_idempotent_and_does_not_mutate_the_catalog() {
    let config = common::test_config();
    let before = config.role_templates.clone();

    let once = roles::templates_for_organization("acme", &config.role_templates);
    let twice = roles::templates_for_organization("acme", &once);

    assert_eq!(once, twice);
    assert_eq!(config.role_templates, before);
}

#[test]
fn empty_catalog_always_returns_unknown() {
    let grants = vec![common::grant("organizations-acme", "admin")];
    assert_eq!(roles::match_role_name(&grants, "acme", &[]), "Unknown");
}

#[test]
fn admin_check_is_exact_on_path_and_role() {
    let config = common::test_config();
    let admin = vec![common::grant("organizations-acme", "admin")];
    let near_misses = vec![
        common::grant("organizations-acme", "ADMIN"),
        common::grant("organizations-acme-projects", "admin"),
        common::grant("organizations-acm", "admin"),
    ];

    assert!(roles::is_admin(&admin, "acme", &config.admin_collections));
    assert!(!roles::is_admin(&near_misses, "acme", &config.admin_collections));
}
