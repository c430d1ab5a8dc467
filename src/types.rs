//! Core data types for the word layout engine.
//!
//! This module defines the categories, tokens, token sets, selections and the
//! position records that placement, arrangement and interaction read and write.

use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a placed token.
pub type TokenId = Uuid;

/// Word categories. Declaration order is the natural order of the word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Action words
    Verb,
    /// Things
    Noun,
    /// Qualities
    Adjective,
    /// Results
    Outcome,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Verb,
        Category::Noun,
        Category::Adjective,
        Category::Outcome,
    ];

    /// Left-to-right order of the highlight stops. Differs from `ALL` on purpose.
    pub const HIGHLIGHT_ORDER: [Category; 4] = [
        Category::Verb,
        Category::Adjective,
        Category::Noun,
        Category::Outcome,
    ];

    /// Position of this category within `HIGHLIGHT_ORDER`.
    pub fn highlight_index(self) -> usize {
        match self {
            Category::Verb => 0,
            Category::Adjective => 1,
            Category::Noun => 2,
            Category::Outcome => 3,
        }
    }

    /// Lowercase singular name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Verb => "verb",
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Outcome => "outcome",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized position of a token. `(50, 50)` is the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRecord {
    /// Horizontal position, 0..=100
    pub left_percent: f32,
    /// Vertical position, 0..=100
    pub top_percent: f32,
    /// Rotation in degrees
    pub rotation_degrees: f32,
}

impl Default for PositionRecord {
    fn default() -> Self {
        Self {
            left_percent: 50.0,
            top_percent: 50.0,
            rotation_degrees: 0.0,
        }
    }
}

impl PositionRecord {
    /// Creates a record from raw values without sanitizing them.
    pub fn new(left_percent: f32, top_percent: f32, rotation_degrees: f32) -> Self {
        Self {
            left_percent,
            top_percent,
            rotation_degrees,
        }
    }

    /// Returns a copy with both coordinates sanitized into `[0, 100]`
    /// and a finite rotation.
    pub fn sanitized(&self) -> Self {
        Self {
            left_percent: crate::placement::sanitize_percent(self.left_percent),
            top_percent: crate::placement::sanitize_percent(self.top_percent),
            rotation_degrees: if self.rotation_degrees.is_finite() {
                self.rotation_degrees
            } else {
                0.0
            },
        }
    }
}

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// On-screen projection of a position record.
///
/// `x`/`y` are pixel offsets relative to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Horizontal offset from viewport center, in pixels
    pub x: f32,
    /// Vertical offset from viewport center, in pixels
    pub y: f32,
    /// Rotation in degrees
    pub rotation_degrees: f32,
    /// Visual scale derived from position
    pub scale: f32,
}

/// One placed word instance.
#[derive(Debug, Clone)]
pub struct Token {
    /// Unique identifier for this token
    pub id: TokenId,
    /// Category the word belongs to
    pub category: Category,
    /// Trimmed display text
    pub text: String,
    /// Current normalized position
    pub position: PositionRecord,
    /// Whether the last arrangement pass highlighted this token
    pub highlighted: bool,
}

impl Token {
    /// Creates a token at the viewport center.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the word
    /// * `text` - Word text; surrounding whitespace is trimmed
    pub fn new(category: Category, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            text: text.trim().to_string(),
            position: PositionRecord::default(),
            highlighted: false,
        }
    }

    /// Visual scale derived from the stored position.
    pub fn scale(&self, config: &crate::config::LayoutConfig) -> f32 {
        crate::placement::scale_from_position(
            config,
            self.position.left_percent,
            self.position.top_percent,
        )
    }
}

/// Tokens grouped by category, in input order within each category.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    categories: BTreeMap<Category, Vec<Token>>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a token set from category → words.
    ///
    /// Words are trimmed and entries that end up empty are skipped. Every
    /// category mentioned in the input is present, even with zero tokens.
    pub fn from_words<I, W, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for (category, list) in words {
            let entry = set.categories.entry(category).or_default();
            for word in list {
                let word = word.as_ref().trim();
                if !word.is_empty() {
                    entry.push(Token::new(category, word));
                }
            }
        }
        set
    }

    /// Appends a token to its category and returns its ID.
    #[cfg(test)]
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = token.id;
        self.categories.entry(token.category).or_default().push(token);
        id
    }

    /// Tokens of one category; empty if the category is absent.
    pub fn category(&self, category: Category) -> &[Token] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over all tokens, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.categories.values().flatten()
    }

    /// Mutable iteration over all tokens.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.categories.values_mut().flatten()
    }

    /// Looks up a token by ID.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.iter().find(|t| t.id == id)
    }

    /// Looks up a token by ID for writing.
    pub fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.iter_mut().find(|t| t.id == id)
    }

    /// Total number of tokens.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tokens flagged by the last arrangement pass.
    pub fn highlighted(&self) -> impl Iterator<Item = &Token> {
        self.iter().filter(|t| t.highlighted)
    }
}

/// The chosen "idea": at most one word per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    choices: BTreeMap<Category, String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chosen word for a category (trimmed).
    pub fn with(mut self, category: Category, text: &str) -> Self {
        self.insert(category, text);
        self
    }

    /// Sets the chosen word for a category (trimmed).
    pub fn insert(&mut self, category: Category, text: &str) {
        self.choices.insert(category, text.trim().to_string());
    }

    /// Chosen word for a category.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.choices.get(&category).map(String::as_str)
    }

    /// Whether a token is the chosen word of its category.
    pub fn matches(&self, token: &Token) -> bool {
        self.get(token.category) == Some(token.text.as_str())
    }

    /// Words joined in highlight order, e.g. `"ship fast code joy"`.
    pub fn phrase(&self) -> String {
        Category::HIGHLIGHT_ORDER
            .iter()
            .filter_map(|c| self.get(*c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<S: AsRef<str>> FromIterator<(Category, S)> for Selection {
    fn from_iter<T: IntoIterator<Item = (Category, S)>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for (category, text) in iter {
            selection.insert(category, text.as_ref());
        }
        selection
    }
}

/// Working position of a highlighted token during overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSlot {
    /// Category whose chosen word occupies this slot
    pub category: Category,
    /// Horizontal position
    pub left_percent: f32,
    /// Vertical position
    pub top_percent: f32,
}
