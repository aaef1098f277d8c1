//! Classification of `url` and `href` values.

use crate::error::SiteError;
use url::Url;

/// Parses `input` as an absolute `http`/`https` URL with a host.
///
/// `location` is only used to label the error.
///
/// # Errors
///
/// Returns [`SiteError::InvalidUrl`] if the value does not parse, uses another
/// scheme, has no host, or omits the `//` after the scheme (`http:example.com`).
pub fn parse_absolute(location: &str, input: &str) -> Result<Url, SiteError> {
    let url = Url::parse(input)
        .map_err(|e| SiteError::invalid_url(location, input, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(SiteError::invalid_url(
                location,
                input,
                format!("unsupported scheme `{other}`"),
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(SiteError::invalid_url(location, input, "missing host"));
    }

    // WHATWG parsing repairs `http:host` into `http://host/`.
    if !input
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"))
    {
        return Err(SiteError::invalid_url(
            location,
            input,
            "expected `//` after the scheme",
        ));
    }

    Ok(url)
}

/// Returns `true` if `href` is a path inside the site.
///
/// Protocol-relative values (`//host/...`) leave the site and are rejected.
/// Browsers read `\` as `/`, so any backslash is rejected too (`/\host`).
pub fn is_site_relative(href: &str) -> bool {
    href.starts_with('/')
        && !href.starts_with("//")
        && !href.contains('\\')
        && !href.contains(char::is_whitespace)
}

/// Strips the `?query` and `#fragment` from a site-relative href.
///
/// ```
/// use apdi_site::utils::url_check::route_of;
///
/// assert_eq!(route_of("/about#privacy"), "/about");
/// assert_eq!(route_of("/bills?page=2"), "/bills");
/// ```
pub fn route_of(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    &href[..end]
}
