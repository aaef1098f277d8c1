//! Domain layer: the data model of the site metadata.
//!
//! - [`entities`] - Organization, social, navigation and footer types
//!
//! The domain layer has no dependencies on the audit or serialization helpers;
//! those live in [`crate::audit`] and [`crate::bundle`].

pub mod entities;
