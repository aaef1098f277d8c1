//! Domain entity representing a social-media presence.

use serde::Serialize;

/// One external social-media profile of the organization.
///
/// `icon` is an opaque identifier meaningful only to the rendering layer
/// (typically an icon-set key such as `"twitter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub handle: &'static str,
}

impl SocialLink {
    /// Returns `true` if `name` matches this platform label, ignoring ASCII case.
    pub fn is_platform(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
