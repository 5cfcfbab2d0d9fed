pub const DEFAULT_CATEGORY: &str = "General";

/// Where a rule's keywords are looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    TitleOnly,
    TitleOrText,
}

#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub scope: Scope,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

impl Rule {
    /// Plain case-sensitive substring test; "Roadmap" matches "Road".
    pub fn matches(&self, title: &str, text: &str) -> bool {
        self.keywords.iter().any(|kw| {
            title.contains(kw) || (self.scope == Scope::TitleOrText && text.contains(kw))
        })
    }
}

/// Evaluated top to bottom, first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["Health"],
        scope: Scope::TitleOrText,
        category: "Healthcare",
        tags: &["Healthcare", "Wellness"],
    },
    Rule {
        keywords: &["Traffic", "Road"],
        scope: Scope::TitleOnly,
        category: "Smart City",
        tags: &["Smart City", "Traffic", "Infrastructure"],
    },
    Rule {
        keywords: &["Water"],
        scope: Scope::TitleOnly,
        category: "Smart Water",
        tags: &["Water Management", "IoT"],
    },
    Rule {
        keywords: &["Sanitation"],
        scope: Scope::TitleOnly,
        category: "Sanitation",
        tags: &["Sanitation", "Safety", "IoT"],
    },
    Rule {
        keywords: &["HR", "Resource"],
        scope: Scope::TitleOnly,
        category: "Governance",
        tags: &["HR", "Management", "Governance"],
    },
];

pub fn first_match<'a>(rules: &'a [Rule], title: &str, text: &str) -> Option<&'a Rule> {
    rules.iter().find(|r| r.matches(title, text))
}
