//! Site-wide metadata for apdigh.org.
//!
//! These statics are the single source for the header, navigation bar, footer
//! and about/contact pages. They are built at compile time and never change.

use crate::domain::entities::{FooterLink, FooterLinks, NavItem, Organization, SocialLink};

/// Organization identity and social profiles.
pub static SITE: Organization = Organization {
    name: "APDI",
    full_name: "Alliance for the Protection of Digital Innovation",
    tagline: "Protecting Digital Innovation",
    url: "https://apdigh.org",
    email: "info@apdigh.org",
    mission: "We track proposed legislation affecting Ghana's digital economy, \
              explain what each bill means in plain language, and help citizens, \
              founders and civil society respond before the consultation window closes.",
    social: &[
        SocialLink {
            name: "Twitter",
            icon: "twitter",
            url: "https://twitter.com/apdigh",
            handle: "@apdigh",
        },
        SocialLink {
            name: "YouTube",
            icon: "youtube",
            url: "https://www.youtube.com/@apdigh",
            handle: "@apdigh",
        },
    ],
};

/// Primary navigation, left to right.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Home",
    },
    NavItem {
        href: "/bills",
        label: "Bills",
    },
    NavItem {
        href: "/about",
        label: "About",
    },
];

/// Footer link groups.
pub static FOOTER_LINKS: FooterLinks = FooterLinks {
    quick_links: &[
        FooterLink::internal("/", "Home"),
        FooterLink::internal("/bills", "All Bills"),
        FooterLink::internal("/about", "About Us"),
    ],
    resources: &[FooterLink::external(
        "https://github.com/apdigh-org/apdigh.org",
        "Source Code",
    )],
    legal: &[
        FooterLink::internal("/about#privacy", "Privacy Policy"),
        FooterLink::internal("/about#terms", "Terms of Use"),
    ],
};
