//! Display copy for the page sections. Fixed at build time.

/// Identifies an entry inside its section so keyed lists never collapse
/// two cards into one.
pub trait CardKey {
    fn card_key(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tag: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

impl CardKey for Project {
    fn card_key(&self) -> &'static str {
        self.title
    }
}

impl CardKey for Service {
    fn card_key(&self) -> &'static str {
        self.name
    }
}

impl CardKey for Testimonial {
    fn card_key(&self) -> &'static str {
        self.author
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fintech brand refresh",
        tag: "Case Study",
        blurb: "Positioned a seed-stage payments startup with a crisp voice and conversion-focused landing copy.",
    },
    Project {
        title: "AI product launch",
        tag: "Launch",
        blurb: "End-to-end narrative, website, and emails for a modern AI tool — sold out beta in 48 hours.",
    },
    Project {
        title: "SaaS website rewrite",
        tag: "Website",
        blurb: "Rebuilt information architecture and messaging for a developer platform. Bounce rate down 32%.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        name: "Website & landing copy",
        description: "Clear, conversion-first pages with a voice your audience trusts.",
    },
    Service {
        name: "Product messaging",
        description: "Positioning, narrative, and naming that make sense instantly.",
    },
    Service {
        name: "Email & lifecycle",
        description: "Onboarding, activation, and launches that feel personal — and perform.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Tight, modern, and perfectly on-brand. The new site finally explains what we do.",
        author: "Maya J., Founder — fintech",
    },
    Testimonial {
        quote: "From vague to vivid. Our demo requests doubled in two weeks.",
        author: "Dev P., CEO — SaaS",
    },
    Testimonial {
        quote: "A calm mind in a chaotic launch. Copy that did the heavy lifting.",
        author: "Rina L., Product Lead — AI",
    },
];

pub const CAPABILITIES: &[&str] = &[
    "Messaging",
    "Positioning",
    "Web copy",
    "Naming",
    "Emails",
    "Launches",
    "UX microcopy",
    "Content",
];

pub const ABOUT_POINTS: &[&str] = &[
    "Based in New York — working worldwide",
    "Comfortable in technical spaces (AI, devtools, fintech)",
    "Collaborative, fast, and detail-obsessed",
];

/// Card keys for `items`, in render order.
pub fn card_keys<T: CardKey>(items: &[T]) -> Vec<&'static str> {
    items.iter().map(CardKey::card_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<T: CardKey>(items: &[T]) {
        let keys = card_keys(items);
        let distinct: HashSet<_> = keys.iter().collect();
        assert_eq!(distinct.len(), items.len(), "duplicate card key in {:?}", keys);
    }

    #[test]
    fn test_card_keys_are_unique_per_section() {
        assert_unique(PROJECTS);
        assert_unique(SERVICES);
        assert_unique(TESTIMONIALS);
    }

    #[test]
    fn test_card_keys_keep_table_order() {
        assert_eq!(
            card_keys(PROJECTS),
            vec!["Fintech brand refresh", "AI product launch", "SaaS website rewrite"]
        );
        assert_eq!(
            card_keys(SERVICES),
            vec!["Website & landing copy", "Product messaging", "Email & lifecycle"]
        );
        assert_eq!(card_keys(TESTIMONIALS).len(), 3);
    }

    #[test]
    fn test_capability_chips_are_distinct() {
        let distinct: HashSet<_> = CAPABILITIES.iter().collect();
        assert_eq!(distinct.len(), CAPABILITIES.len());
    }
}
