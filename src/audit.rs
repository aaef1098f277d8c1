//! Property checks over the site metadata.
//!
//! The statics in [`crate::site`] are never checked when they are read. This
//! module is run by the test suite (or a consuming build step) to catch
//! authoring mistakes: empty labels, broken URLs, malformed handles, and
//! footer links that point at routes the site does not serve.
//!
//! # Rules
//!
//! - Every string field is non-empty
//! - `site.url`, social URLs and external footer hrefs are absolute
//!   `http`/`https` URLs with a host
//! - `site.email` is a syntactically valid address
//! - Social handles look like `@name`
//! - Navigation hrefs are site-relative
//! - Internal footer hrefs are site-relative and resolve to a navigation route
//!   once the fragment and query are dropped

use crate::domain::entities::{FooterLinks, NavItem, Organization};
use crate::error::SiteError;
use crate::site::{FOOTER_LINKS, NAV_ITEMS, SITE};
use crate::utils::url_check::{is_site_relative, parse_absolute, route_of};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};
use validator::ValidateEmail;

/// Compiled regex for social handles.
static HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_.]+$").unwrap());

/// Outcome of an audit: every violation found, in traversal order.
#[derive(Debug, Default)]
pub struct AuditReport {
    violations: Vec<SiteError>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[SiteError] {
        &self.violations
    }

    /// Converts the report into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::AuditFailed`] carrying the first violation and the
    /// total count if the report is not clean.
    pub fn into_result(self) -> Result<(), SiteError> {
        let count = self.violations.len();
        match self.violations.into_iter().next() {
            None => Ok(()),
            Some(first) => Err(SiteError::AuditFailed {
                count,
                first: Box::new(first),
            }),
        }
    }
}

/// Audits the process-wide [`SITE`], [`NAV_ITEMS`] and [`FOOTER_LINKS`].
pub fn audit_current() -> AuditReport {
    audit(&SITE, NAV_ITEMS, &FOOTER_LINKS)
}

/// Checks the given metadata against every rule in the module docs.
///
/// The navigation hrefs define the route space used to resolve internal footer
/// links.
pub fn audit(
    site: &Organization,
    nav_items: &[NavItem],
    footer_links: &FooterLinks,
) -> AuditReport {
    let mut auditor = Auditor::default();

    auditor.organization(site);

    let routes: HashSet<&str> = nav_items.iter().map(|item| route_of(item.href)).collect();

    for (i, item) in nav_items.iter().enumerate() {
        let at = format!("navItems[{i}]");
        auditor.non_empty(&format!("{at}.label"), item.label);
        auditor.site_relative(&format!("{at}.href"), item.href);
    }

    for (group, links) in footer_links.groups() {
        for (i, link) in links.iter().enumerate() {
            let at = format!("footerLinks.{group}[{i}]");
            let href_at = format!("{at}.href");
            auditor.non_empty(&format!("{at}.label"), link.label);

            if link.is_external() {
                auditor.absolute_url(&href_at, link.href);
            } else if auditor.site_relative(&href_at, link.href)
                && !routes.contains(route_of(link.href))
            {
                auditor.push(SiteError::unknown_route(href_at, link.href));
            }
        }
    }

    let report = AuditReport {
        violations: auditor.violations,
    };

    if report.is_clean() {
        debug!(
            nav_items = nav_items.len(),
            footer_links = footer_links.iter().count(),
            "site metadata audit passed"
        );
    } else {
        debug!(
            violations = report.violations.len(),
            "site metadata audit failed"
        );
    }

    report
}

#[derive(Default)]
struct Auditor {
    violations: Vec<SiteError>,
}

impl Auditor {
    fn push(&mut self, error: SiteError) {
        warn!(location = error.location(), error = %error, "site metadata violation");
        self.violations.push(error);
    }

    fn organization(&mut self, site: &Organization) {
        self.non_empty("site.name", site.name);
        self.non_empty("site.fullName", site.full_name);
        self.non_empty("site.tagline", site.tagline);
        self.non_empty("site.mission", site.mission);
        self.absolute_url("site.url", site.url);

        if self.non_empty("site.email", site.email) && !site.email.validate_email() {
            self.push(SiteError::invalid_email("site.email", site.email));
        }

        for (i, social) in site.social.iter().enumerate() {
            let at = format!("site.social[{i}]");
            self.non_empty(&format!("{at}.name"), social.name);
            self.non_empty(&format!("{at}.icon"), social.icon);
            self.absolute_url(&format!("{at}.url"), social.url);

            let handle_at = format!("{at}.handle");
            if self.non_empty(&handle_at, social.handle) && !HANDLE_REGEX.is_match(social.handle)
            {
                self.push(SiteError::invalid_handle(handle_at, social.handle));
            }
        }
    }

    /// Returns `true` if the value is non-empty.
    fn non_empty(&mut self, location: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(SiteError::empty(location));
            return false;
        }
        true
    }

    fn absolute_url(&mut self, location: &str, value: &str) {
        if !self.non_empty(location, value) {
            return;
        }
        if let Err(e) = parse_absolute(location, value) {
            self.push(e);
        }
    }

    /// Returns `true` if the value is a site-relative path.
    fn site_relative(&mut self, location: &str, value: &str) -> bool {
        if !self.non_empty(location, value) {
            return false;
        }
        if !is_site_relative(value) {
            self.push(SiteError::not_site_relative(location, value));
            return false;
        }
        true
    }
}
