mod common;

use apdi_site::audit::audit_current;
use apdi_site::domain::entities::{FooterLinks, NavItem, Organization};
use apdi_site::utils::url_check::is_site_relative;
use apdi_site::{FOOTER_LINKS, NAV_ITEMS, SITE};
use validator::ValidateEmail;

#[test]
fn test_social_urls_absolute_and_handles_present() {
    for social in SITE.social {
        assert!(common::is_absolute_url(social.url), "{}", social.url);
        assert!(!social.handle.is_empty());
    }
}

#[test]
fn test_site_url_and_email() {
    assert!(common::is_absolute_url(SITE.url));
    assert!(SITE.email.validate_email(), "{}", SITE.email);
}

#[test]
fn test_nav_items_site_relative_with_labels() {
    for item in NAV_ITEMS {
        assert!(item.href.starts_with('/'), "{}", item.href);
        assert!(!item.label.is_empty());
    }
}

#[test]
fn test_footer_hrefs_match_external_flag() {
    for (at, link) in common::labelled_footer_links() {
        if link.is_external() {
            assert!(common::is_absolute_url(link.href), "{at}: {}", link.href);
        } else {
            assert!(is_site_relative(link.href), "{at}: {}", link.href);
        }
        assert!(!link.label.is_empty(), "{at}");
    }
}

#[test]
fn test_no_empty_identity_fields() {
    for value in [
        SITE.name,
        SITE.full_name,
        SITE.tagline,
        SITE.url,
        SITE.email,
        SITE.mission,
    ] {
        assert!(!value.trim().is_empty());
    }
}

#[test]
fn test_reads_are_deterministic() {
    let first: Vec<NavItem> = NAV_ITEMS.to_vec();
    let second: Vec<NavItem> = NAV_ITEMS.to_vec();
    assert_eq!(first, second);

    let footer_first: Vec<_> = FOOTER_LINKS.iter().copied().collect();
    let footer_second: Vec<_> = FOOTER_LINKS.iter().copied().collect();
    assert_eq!(footer_first, footer_second);

    let (site_first, site_second) = (SITE, SITE);
    assert_eq!(site_first, site_second);
}

#[test]
fn test_statics_have_stable_addresses() {
    let nav_first = NAV_ITEMS.as_ptr();
    let nav_second = NAV_ITEMS.as_ptr();
    assert_eq!(nav_first, nav_second);

    let site_first: *const Organization = &SITE;
    let site_second: *const Organization = &SITE;
    assert_eq!(site_first, site_second);

    let legal_first = FOOTER_LINKS.legal.as_ptr();
    let legal_second = FOOTER_LINKS.legal.as_ptr();
    assert_eq!(legal_first, legal_second);
}

#[test]
fn test_statics_shared_across_threads() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<Organization>();
    assert_sync::<FooterLinks>();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| NAV_ITEMS.iter().map(|item| item.href).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ["/", "/bills", "/about"]);
    }
}

#[test]
fn test_audit_current_is_clean() {
    common::init_tracing();

    let report = audit_current();
    assert!(report.is_clean(), "{:?}", report.violations());
    assert!(report.into_result().is_ok());
}
