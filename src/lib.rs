//! # APDI Site
//!
//! Static organization, navigation and footer metadata for
//! [apdigh.org](https://apdigh.org).
//!
//! The crate exports three read-only statics consumed by the page templates:
//!
//! - [`SITE`] - Organization identity and social profiles
//! - [`NAV_ITEMS`] - Primary navigation, in display order
//! - [`FOOTER_LINKS`] - Quick links, resources and legal links
//!
//! They are built at compile time, never mutated, and safe to read from any
//! thread. Reading them performs no I/O and no allocation.
//!
//! ```
//! use apdi_site::{NAV_ITEMS, SITE};
//!
//! assert_eq!(SITE.name, "APDI");
//! assert_eq!(NAV_ITEMS[0].href, "/");
//! ```
//!
//! ## Layout
//!
//! - [`domain`] - Entity types for the metadata
//! - [`site`] - The statics themselves
//! - [`bundle`] - JSON snapshot for the template layer
//! - [`audit`] - Property checks for authoring mistakes
//! - [`utils`] - URL and path classification
//!
//! ## Checking the data
//!
//! The statics are not validated when read. Run [`audit::audit_current`] (the
//! test suite does) to catch broken URLs, empty labels and dead footer links.

pub mod audit;
pub mod bundle;
pub mod domain;
pub mod error;
pub mod site;
pub mod utils;

pub use error::SiteError;
pub use site::{FOOTER_LINKS, NAV_ITEMS, SITE};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::audit::{AuditReport, audit, audit_current};
    pub use crate::bundle::SiteBundle;
    pub use crate::domain::entities::{FooterLink, FooterLinks, NavItem, Organization, SocialLink};
    pub use crate::error::SiteError;
    pub use crate::site::{FOOTER_LINKS, NAV_ITEMS, SITE};
}
