//! Typed shapes of the site metadata.
//!
//! Every entity borrows `'static` data and carries no interior mutability, so a
//! value placed in a `static` is frozen for the lifetime of the process and can
//! be read from any thread.
//!
//! # Entity Types
//!
//! - [`Organization`] - Identity of the organization behind the site
//! - [`SocialLink`] - One social-media presence
//! - [`NavItem`] - One entry of the primary navigation bar
//! - [`FooterLink`] / [`FooterLinks`] - Footer entries and their three groups
//!
//! All entities serialize with camelCase keys, matching the shape the template
//! layer expects.

pub mod footer_link;
pub mod nav_item;
pub mod organization;
pub mod social_link;

pub use footer_link::{FooterLink, FooterLinks};
pub use nav_item::NavItem;
pub use organization::Organization;
pub use social_link::SocialLink;
