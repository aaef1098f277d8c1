//! Domain entity representing a navigation bar entry.

use serde::Serialize;

/// One entry of the primary navigation menu.
///
/// Entries are rendered in the order they are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_serializes_href_and_label() {
        let item = NavItem {
            href: "/bills",
            label: "Bills",
        };

        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json, serde_json::json!({ "href": "/bills", "label": "Bills" }));
    }
}
