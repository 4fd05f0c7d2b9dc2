//! Keyword-driven vocabularies for the generic fallback template.
//!
//! A free-text topic or industry is matched case-insensitively against a few
//! known keys by substring. The first hit wins; no hit yields the default
//! vocabulary.

/// Vocabulary for a training topic. Every list has exactly four entries so the
/// templates can index without bounds checks.
#[derive(Debug, PartialEq, Eq)]
pub struct TopicTheme {
    pub themes: [&'static str; 4],
    pub visual_keywords: [&'static str; 4],
    pub activities: [&'static str; 4],
}

#[derive(Debug, PartialEq, Eq)]
pub struct IndustryContext {
    pub examples: [&'static str; 4],
    pub challenges: [&'static str; 4],
}

const TOPIC_THEMES: &[(&str, TopicTheme)] = &[
    (
        "Cybersecurity",
        TopicTheme {
            themes: [
                "threat detection",
                "incident response",
                "security protocols",
                "phishing awareness",
            ],
            visual_keywords: [
                "digital security",
                "network protection",
                "data encryption",
                "cyber defense",
            ],
            activities: [
                "threat simulation",
                "security audit",
                "password strength testing",
                "phishing email identification",
            ],
        },
    ),
    (
        "Agile",
        TopicTheme {
            themes: [
                "sprint planning",
                "daily standups",
                "retrospectives",
                "backlog refinement",
            ],
            visual_keywords: [
                "team collaboration",
                "kanban board",
                "scrum meeting",
                "agile workspace",
            ],
            activities: [
                "sprint poker",
                "retrospective exercise",
                "user story mapping",
                "velocity tracking",
            ],
        },
    ),
    (
        "Leadership",
        TopicTheme {
            themes: [
                "emotional intelligence",
                "conflict resolution",
                "delegation",
                "motivation",
            ],
            visual_keywords: [
                "team leadership",
                "executive coaching",
                "management meeting",
                "professional development",
            ],
            activities: [
                "leadership assessment",
                "role-playing scenarios",
                "360 feedback",
                "goal-setting workshop",
            ],
        },
    ),
    (
        "Diversity",
        TopicTheme {
            themes: [
                "unconscious bias",
                "inclusive language",
                "cultural competence",
                "equity practices",
            ],
            visual_keywords: [
                "diverse team",
                "inclusive workplace",
                "multicultural group",
                "equality concept",
            ],
            activities: [
                "bias recognition",
                "inclusive dialogue",
                "perspective-taking",
                "ally skills practice",
            ],
        },
    ),
];

const DEFAULT_TOPIC_THEME: TopicTheme = TopicTheme {
    themes: [
        "fundamentals",
        "best practices",
        "implementation",
        "evaluation",
    ],
    visual_keywords: [
        "business concept",
        "professional training",
        "corporate learning",
        "workplace growth",
    ],
    activities: [
        "group discussion",
        "case study analysis",
        "practical exercise",
        "peer review",
    ],
};

const INDUSTRY_CONTEXTS: &[(&str, IndustryContext)] = &[
    (
        "Technology",
        IndustryContext {
            examples: [
                "software deployment",
                "API integration",
                "cloud infrastructure",
                "DevOps pipeline",
            ],
            challenges: [
                "rapid innovation",
                "technical debt",
                "scalability",
                "security vulnerabilities",
            ],
        },
    ),
    (
        "Healthcare",
        IndustryContext {
            examples: [
                "patient safety",
                "HIPAA compliance",
                "clinical protocols",
                "electronic health records",
            ],
            challenges: [
                "regulatory changes",
                "patient confidentiality",
                "staff burnout",
                "medical errors",
            ],
        },
    ),
    (
        "Finance",
        IndustryContext {
            examples: [
                "risk assessment",
                "compliance audits",
                "financial modeling",
                "fraud detection",
            ],
            challenges: [
                "market volatility",
                "regulatory compliance",
                "cybersecurity threats",
                "customer trust",
            ],
        },
    ),
    (
        "Manufacturing",
        IndustryContext {
            examples: [
                "lean production",
                "quality control",
                "supply chain",
                "equipment maintenance",
            ],
            challenges: [
                "operational efficiency",
                "workplace safety",
                "inventory management",
                "process optimization",
            ],
        },
    ),
];

const DEFAULT_INDUSTRY_CONTEXT: IndustryContext = IndustryContext {
    examples: [
        "workflow optimization",
        "team collaboration",
        "process improvement",
        "customer outcomes",
    ],
    challenges: ["efficiency", "quality", "communication", "innovation"],
};

fn match_key<'a, T>(text: &str, table: &'a [(&str, T)]) -> Option<&'a T> {
    let text = text.to_lowercase();
    table
        .iter()
        .find(|(key, _)| text.contains(&key.to_lowercase()))
        .map(|(_, value)| value)
}

pub fn topic_theme(topic: &str) -> &'static TopicTheme {
    match_key(topic, TOPIC_THEMES).unwrap_or(&DEFAULT_TOPIC_THEME)
}

pub fn industry_context(industry: &str) -> &'static IndustryContext {
    match_key(industry, INDUSTRY_CONTEXTS).unwrap_or(&DEFAULT_INDUSTRY_CONTEXT)
}
