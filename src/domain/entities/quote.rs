use crate::domain::error::DomainError;
use crate::domain::values::quote_key::QuoteKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from user input. Both fields are trimmed and must be non-empty.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Result<Self, DomainError> {
        let text: String = text.into();
        let category: String = category.into();
        let text = text.trim().to_string();
        let category = category.trim().to_string();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("Quote text must not be empty".into()));
        }
        if category.is_empty() {
            return Err(DomainError::InvalidInput(
                "Quote category must not be empty".into(),
            ));
        }
        Ok(Self { text, category })
    }

    /// Deduplication key: the lower-cased text.
    pub fn key(&self) -> QuoteKey {
        QuoteKey::of(&self.text)
    }

    /// Records coming from storage, files or the network are not validated
    /// on the way in; anything with blank text counts as absent.
    pub fn is_well_formed(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let q = Quote::new("  Stay hungry  ", " Motivation ").unwrap();
        assert_eq!(q.text, "Stay hungry");
        assert_eq!(q.category, "Motivation");
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(Quote::new("   ", "Life").is_err());
        assert!(Quote::new("Carpe diem", "").is_err());
    }

    #[test]
    fn test_key_ignores_case_and_category() {
        let a = Quote::new("Be Bold", "Old").unwrap();
        let b = Quote::new("be bold", "New").unwrap();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_well_formed() {
        let blank = Quote {
            text: " ".into(),
            category: "X".into(),
        };
        assert!(!blank.is_well_formed());
        assert!(Quote::new("ok", "X").unwrap().is_well_formed());
    }
}
