#![allow(dead_code)]

use apdi_site::FOOTER_LINKS;
use apdi_site::domain::entities::FooterLink;
use apdi_site::utils::url_check::parse_absolute;
use tracing_subscriber::EnvFilter;

/// Installs a `RUST_LOG`-driven subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every footer link paired with its `group[index]` label.
pub fn labelled_footer_links() -> Vec<(String, &'static FooterLink)> {
    FOOTER_LINKS
        .groups()
        .into_iter()
        .flat_map(|(group, links)| {
            links
                .iter()
                .enumerate()
                .map(move |(i, link)| (format!("{group}[{i}]"), link))
        })
        .collect()
}

pub fn is_absolute_url(value: &str) -> bool {
    parse_absolute("test", value).is_ok()
}
