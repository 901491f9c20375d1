/// Named in-page targets the navbar can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Work,
    Services,
    About,
    Testimonials,
    Contact,
}

pub const ALL_ANCHORS: [Anchor; 6] = [
    Anchor::Top,
    Anchor::Work,
    Anchor::Services,
    Anchor::About,
    Anchor::Testimonials,
    Anchor::Contact,
];

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Work => "work",
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Testimonials => "testimonials",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Top => "Top",
            Anchor::Work => "Work",
            Anchor::Services => "Services",
            Anchor::About => "About",
            Anchor::Testimonials => "Kind words",
            Anchor::Contact => "Contact",
        }
    }

    /// Resolves a `location.hash` value. An empty hash is the top of the page.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            return Some(Anchor::Top);
        }
        ALL_ANCHORS.iter().copied().find(|anchor| anchor.id() == id)
    }
}

/// Links shown in the desktop nav and the mobile menu, in display order.
pub const NAV_LINKS: [Anchor; 5] = [
    Anchor::Work,
    Anchor::Services,
    Anchor::About,
    Anchor::Testimonials,
    Anchor::Contact,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_hash() {
        assert_eq!(Anchor::from_hash("#work"), Some(Anchor::Work));
        assert_eq!(Anchor::from_hash("testimonials"), Some(Anchor::Testimonials));
        assert_eq!(Anchor::from_hash(""), Some(Anchor::Top));
        assert_eq!(Anchor::from_hash("#"), Some(Anchor::Top));
        assert_eq!(Anchor::from_hash("#pricing"), None);
    }

    #[test]
    fn test_href_round_trips_for_every_anchor() {
        for anchor in ALL_ANCHORS {
            assert_eq!(Anchor::from_hash(&anchor.href()), Some(anchor));
        }
    }

    #[test]
    fn test_nav_links_are_unique_and_skip_top() {
        let ids: HashSet<_> = NAV_LINKS.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), NAV_LINKS.len());
        assert!(!NAV_LINKS.contains(&Anchor::Top));
    }
}
