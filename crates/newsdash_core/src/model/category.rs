//! Feed categories and the sidebar category filter.
//!
//! # Responsibility
//! - Define the closed set of categories a feed item can belong to.
//! - Model the `all` sentinel as a filter variant, never as a category.
//!
//! # Invariants
//! - Wire/slug form is always lowercase (`politics`, `all`, ...).
//! - `CategoryFilter::All` is never stored on a `FeedItem`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Category of one feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Politics,
    Entertainment,
    Health,
    Music,
    Trending,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Politics,
        Category::Entertainment,
        Category::Health,
        Category::Music,
        Category::Trending,
    ];

    /// Lowercase slug used on the wire and in filters.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Politics => "politics",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Music => "music",
            Self::Trending => "trending",
        }
    }

    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Politics => "Politics",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Music => "Music",
            Self::Trending => "Trending",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error for unknown category or filter slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl Display for ParseCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected all|politics|entertainment|health|music|trending",
            self.0
        )
    }
}

impl Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == normalized)
            .ok_or(ParseCategoryError(normalized))
    }
}

/// Sidebar selection applied to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Sentinel that passes every item.
    #[default]
    All,
    /// Keeps only items of one category.
    Only(Category),
}

/// Sidebar order of the category filters.
pub const SIDEBAR_FILTERS: [CategoryFilter; 6] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::Politics),
    CategoryFilter::Only(Category::Trending),
    CategoryFilter::Only(Category::Entertainment),
    CategoryFilter::Only(Category::Music),
    CategoryFilter::Only(Category::Health),
];

impl CategoryFilter {
    /// Returns whether an item of `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    /// Sidebar label (`All`, `Politics`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse::<Category>().map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryFilter};

    #[test]
    fn filter_parses_sentinel_and_categories_case_insensitively() {
        assert_eq!("all".parse::<CategoryFilter>().expect("all sentinel should parse"), CategoryFilter::All);
        assert_eq!(
            " Health ".parse::<CategoryFilter>().expect("padded label should parse"),
            CategoryFilter::Only(Category::Health)
        );
        assert!("sports".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn all_is_not_a_category() {
        assert!("all".parse::<Category>().is_err());
    }
}
