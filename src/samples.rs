//! Built-in word lists used to seed the canvas on startup.

use crate::types::Category;

/// Default verbs.
pub const VERBS: &[&str] = &[
    "analyze", "refactor", "automate", "debug", "test", "monitor", "optimize", "deploy",
    "review", "document", "scale", "secure", "improve", "enhance", "streamline",
];

/// Default nouns.
pub const NOUNS: &[&str] = &[
    "pipeline", "module", "commit", "build", "bug", "metric", "system", "code", "test",
    "deployment", "feature", "service", "database", "cache", "API",
];

/// Default adjectives.
pub const ADJECTIVES: &[&str] = &[
    "efficient", "reliable", "scalable", "secure", "fast", "maintainable", "robust",
    "flexible", "clean", "modular", "automated", "optimized", "tested", "documented",
    "performant",
];

/// Default outcomes.
pub const OUTCOMES: &[&str] = &[
    "efficiency", "stability", "quality", "speed", "insight", "scalability", "security",
    "productivity", "reliability", "maintainability", "performance", "accuracy",
    "consistency", "clarity", "innovation",
];

/// The default word list of a category.
pub const fn words_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Verb => VERBS,
        Category::Noun => NOUNS,
        Category::Adjective => ADJECTIVES,
        Category::Outcome => OUTCOMES,
    }
}

/// All default lists in category order, ready for `TokenSet::from_words`.
pub fn default_words() -> Vec<(Category, Vec<&'static str>)> {
    Category::ALL
        .iter()
        .map(|c| (*c, words_for(*c).to_vec()))
        .collect()
}
