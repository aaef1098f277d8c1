//! Domain entity representing the organization behind the site.

use super::SocialLink;
use serde::Serialize;

/// Identity of the organization: names, contact details, mission and social
/// profiles.
///
/// `social` is kept in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Short label, e.g. the acronym used in the header.
    pub name: &'static str,
    /// Legal or long display name.
    pub full_name: &'static str,
    pub tagline: &'static str,
    /// Canonical absolute URL of the site.
    pub url: &'static str,
    pub email: &'static str,
    pub mission: &'static str,
    pub social: &'static [SocialLink],
}

impl Organization {
    /// Returns a `mailto:` href for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Finds a social profile by platform label, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// let twitter = apdi_site::SITE.social_by_name("twitter").unwrap();
    /// assert!(twitter.handle.starts_with('@'));
    /// ```
    pub fn social_by_name(&self, name: &str) -> Option<&'static SocialLink> {
        self.social.iter().find(|link| link.is_platform(name))
    }
}
