//! Helper functions shared by the audit.
//!
//! - [`url_check`] - Absolute URL parsing and site-relative path checks

pub mod url_check;
