/// Normalized identity of a quote. Two quotes whose text differs only in
/// letter case share a key; the category plays no part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteKey(String);

impl QuoteKey {
    pub fn of(text: &str) -> Self {
        QuoteKey(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(QuoteKey::of("Hello"), QuoteKey::of("hELLO"));
        assert_ne!(QuoteKey::of("Hello"), QuoteKey::of("Hello!"));
        assert_eq!(QuoteKey::of("ÀB"), QuoteKey::of("àb"));
    }
}
