//! Domain entities for footer links and their groups.

use serde::Serialize;

/// One entry in a footer link group.
///
/// Internal links carry a site-relative `href`, optionally with a `#fragment`.
/// Links that leave the site set `external`; the flag is omitted from the
/// serialized form when it is `false`, so an absent flag means internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub href: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "is_internal")]
    pub external: bool,
}

fn is_internal(external: &bool) -> bool {
    !*external
}

impl FooterLink {
    /// Creates a site-relative footer link.
    pub const fn internal(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: false,
        }
    }

    /// Creates a footer link that leaves the site.
    pub const fn external(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: true,
        }
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// The three footer link groups, each in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLinks {
    pub quick_links: &'static [FooterLink],
    pub resources: &'static [FooterLink],
    pub legal: &'static [FooterLink],
}

impl FooterLinks {
    /// Serialized group names, in display order.
    pub const GROUP_NAMES: [&'static str; 3] = ["quickLinks", "resources", "legal"];

    /// Returns each group paired with its serialized name, in display order.
    pub fn groups(&self) -> [(&'static str, &'static [FooterLink]); 3] {
        let [quick_links, resources, legal] = Self::GROUP_NAMES;
        [
            (quick_links, self.quick_links),
            (resources, self.resources),
            (legal, self.legal),
        ]
    }

    /// Iterates over every footer link, group by group.
    pub fn iter(&self) -> impl Iterator<Item = &'static FooterLink> {
        self.groups().into_iter().flat_map(|(_, links)| links.iter())
    }
}
