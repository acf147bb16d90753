use crate::domain::entities::quote::Quote;
use std::fmt;
use std::str::FromStr;

/// Category filter applied when listing or picking quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Category comparison is case-insensitive.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => quote.category.to_lowercase() == name.to_lowercase(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Named(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Category filter must not be empty".to_string());
        }
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

/// Distinct categories in order of first appearance. Categories differing
/// only in case are reported once, under the first spelling seen.
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    quotes
        .iter()
        .filter(|q| seen.insert(q.category.to_lowercase()))
        .map(|q| q.category.clone())
        .collect()
}
