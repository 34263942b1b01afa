use serde::{Deserialize, Serialize};

/// One top-level navigation entry. Forms an ordered two-level forest with
/// its submenu; owned by the hosting UI, read-only to this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubMenuItem>,
}

/// A second-level navigation entry under one `MenuItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMenuItem {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Normalize a route path for comparison: trailing slashes are stripped,
/// and the empty path or bare root normalizes to `/`.
pub fn normalize_path(path: &str) -> String {
    let cleaned = path.trim_end_matches('/');
    if cleaned.is_empty() {
        "/".to_string()
    } else {
        cleaned.to_string()
    }
}
