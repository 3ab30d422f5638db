//! Fixed template tables for draft generation

/// Title templates; `{topic}` is replaced with the capitalized topic.
/// Selection shuffles this table, so repeated calls vary.
pub(crate) const TITLE_TEMPLATES: &[&str] = &[
    "{topic}: The Complete Guide for 2025",
    "10 Proven {topic} Strategies That Actually Work",
    "How to Master {topic} Step by Step",
    "{topic} Explained: Everything You Need to Know",
    "The Ultimate {topic} Checklist for Beginners",
    "{topic} Mistakes Everyone Makes and How to Avoid Them",
    "Why {topic} Matters More Than Ever",
    "{topic} Best Practices From Industry Experts",
];

/// Description templates, used in fixed order
pub(crate) const DESCRIPTION_TEMPLATES: &[&str] = &[
    "Discover everything you need to know about {topic}. Our comprehensive guide covers \
     proven strategies, common pitfalls and expert tips to help you get results faster.",
    "Looking to improve your {topic}? Learn the practical techniques professionals use, \
     with step-by-step instructions and real examples you can apply today.",
    "Master {topic} with this hands-on guide. From fundamentals to advanced tactics, we \
     break down exactly what works and what to skip in 2025.",
    "The essential {topic} resource: clear explanations, actionable checklists and \
     up-to-date recommendations trusted by thousands of readers.",
];

/// Keyword idea patterns, used in fixed order over the lower-cased topic
pub(crate) const KEYWORD_PATTERNS: &[&str] = &[
    "{topic}",
    "best {topic}",
    "{topic} guide",
    "{topic} tips",
    "how to {topic}",
    "{topic} for beginners",
    "{topic} tools",
    "{topic} checklist",
    "learn {topic}",
    "{topic} strategy",
];

/// Canned improvement tips, used in fixed order
pub(crate) const TIP_TEMPLATES: &[&str] = &[
    "Write a dedicated pillar page about {topic} and link related articles to it.",
    "Answer the questions people actually ask about {topic}; check the queries search \
     engines autocomplete for.",
    "Refresh your existing {topic} content at least twice a year so dates and screenshots \
     stay current.",
    "Add descriptive alt text mentioning {topic} to every image on the page.",
    "Earn links by publishing original data or a free tool related to {topic}.",
];
