//! Route-to-icon resolution over the navigation forest: exact matches
//! short-circuit, otherwise the longest normalized path prefix wins.

use shared_types::{normalize_path, MenuItem};

struct BestMatch<'a> {
    icon: &'a str,
    len: isize,
}

/// Resolve the navigation icon for `current_path`.
///
/// An exact submenu match returns immediately and takes priority over an
/// exact parent match found in a later item; an exact parent match returns
/// immediately after its own submenu has been scanned. Failing an exact
/// match, the most specific prefix wins, where specificity is the
/// normalized path length; updates happen only on strictly greater length,
/// so forest order breaks ties. Nothing matching yields `fallback`.
pub fn icon_for_route<'a>(current_path: &str, menu: &'a [MenuItem], fallback: &'a str) -> String {
    let current = normalize_path(current_path);
    let mut best = BestMatch {
        icon: fallback,
        len: -1,
    };

    for item in menu {
        let parent_path = normalize_path(&item.path);
        let parent_icon = item.icon.as_deref().unwrap_or(fallback);

        for sub in &item.submenu {
            let sub_path = normalize_path(&sub.path);
            let sub_icon = sub.icon.as_deref().unwrap_or(parent_icon);
            if sub_path == current {
                return sub_icon.to_string();
            }
            if current.starts_with(&sub_path) && sub_path.len() as isize > best.len {
                best = BestMatch {
                    icon: sub_icon,
                    len: sub_path.len() as isize,
                };
            }
        }

        if parent_path == current {
            return parent_icon.to_string();
        }
        if current.starts_with(&parent_path) && parent_path.len() as isize > best.len {
            best = BestMatch {
                icon: parent_icon,
                len: parent_path.len() as isize,
            };
        }
    }

    best.icon.to_string()
}
