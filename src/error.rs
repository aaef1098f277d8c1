//! Authoring errors found in the site metadata.
//!
//! The statics themselves cannot fail at runtime. These errors describe data
//! that was authored incorrectly and are produced by [`crate::audit`], or by
//! [`crate::bundle`] when serialization fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{location}: must not be empty")]
    EmptyField { location: String },

    #[error("{location}: invalid URL `{value}`: {reason}")]
    InvalidUrl {
        location: String,
        value: String,
        reason: String,
    },

    #[error("{location}: invalid email address `{value}`")]
    InvalidEmail { location: String, value: String },

    #[error("{location}: invalid handle `{value}`")]
    InvalidHandle { location: String, value: String },

    #[error("{location}: `{value}` is not a site-relative path")]
    NotSiteRelative { location: String, value: String },

    #[error("{location}: `{value}` does not match any site route")]
    UnknownRoute { location: String, value: String },

    #[error("site metadata audit found {count} violation(s), first: {first}")]
    AuditFailed { count: usize, first: Box<SiteError> },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl SiteError {
    pub fn empty(location: impl Into<String>) -> Self {
        Self::EmptyField {
            location: location.into(),
        }
    }

    pub fn invalid_url(
        location: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUrl {
            location: location.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_email(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEmail {
            location: location.into(),
            value: value.into(),
        }
    }

    pub fn invalid_handle(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHandle {
            location: location.into(),
            value: value.into(),
        }
    }

    pub fn not_site_relative(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotSiteRelative {
            location: location.into(),
            value: value.into(),
        }
    }

    pub fn unknown_route(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownRoute {
            location: location.into(),
            value: value.into(),
        }
    }

    /// Dotted path of the offending field, e.g. `site.social[0].url`.
    ///
    /// `None` for errors not tied to a single field.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::EmptyField { location }
            | Self::InvalidUrl { location, .. }
            | Self::InvalidEmail { location, .. }
            | Self::InvalidHandle { location, .. }
            | Self::NotSiteRelative { location, .. }
            | Self::UnknownRoute { location, .. } => Some(location.as_str()),
            Self::AuditFailed { first, .. } => first.location(),
            Self::Serialize(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location_and_value() {
        let err = SiteError::not_site_relative("navItems[2].href", "about");
        assert_eq!(
            err.to_string(),
            "navItems[2].href: `about` is not a site-relative path"
        );
    }

    #[test]
    fn test_location_of_field_error() {
        let err = SiteError::invalid_url("site.url", "apdigh", "relative URL without a base");
        assert_eq!(err.location(), Some("site.url"));
    }

    #[test]
    fn test_audit_failed_reports_first_location() {
        let err = SiteError::AuditFailed {
            count: 3,
            first: Box::new(SiteError::empty("site.tagline")),
        };

        assert_eq!(err.location(), Some("site.tagline"));
        assert!(err.to_string().contains("3 violation(s)"));
        assert!(err.to_string().ends_with("site.tagline: must not be empty"));
    }
}
