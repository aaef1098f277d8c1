//! Serializable snapshot of the site metadata.
//!
//! The template layer reads the metadata as one JSON document:
//!
//! ```json
//! {
//!   "site": { "name": "APDI", "fullName": "...", "social": [ ... ] },
//!   "navItems": [ { "href": "/", "label": "Home" } ],
//!   "footerLinks": { "quickLinks": [ ... ], "resources": [ ... ], "legal": [ ... ] }
//! }
//! ```

use crate::domain::entities::{FooterLinks, NavItem, Organization};
use crate::error::SiteError;
use crate::site::{FOOTER_LINKS, NAV_ITEMS, SITE};
use serde::Serialize;

/// Borrowed view over organization, navigation and footer metadata.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBundle<'a> {
    pub site: &'a Organization,
    pub nav_items: &'a [NavItem],
    pub footer_links: &'a FooterLinks,
}

impl SiteBundle<'static> {
    /// Bundle of the process-wide [`SITE`], [`NAV_ITEMS`] and [`FOOTER_LINKS`].
    pub fn current() -> Self {
        Self {
            site: &SITE,
            nav_items: NAV_ITEMS,
            footer_links: &FOOTER_LINKS,
        }
    }
}

impl SiteBundle<'_> {
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Same as [`SiteBundle::to_json`], indented for humans.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
