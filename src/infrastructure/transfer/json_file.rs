use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use std::path::Path;

/// Quotes decoded from an import file, plus how many array items were not
/// `{text, category}` records with non-blank strings.
#[derive(Debug, Default)]
pub struct ImportedFile {
    pub quotes: Vec<Quote>,
    pub skipped: usize,
}

#[derive(Debug, serde::Deserialize)]
struct RawQuote {
    text: String,
    category: String,
}

/// Decode a JSON array of quotes. Items of the wrong shape or with blank
/// fields are skipped; both fields are trimmed. Anything other than an
/// array is an error.
pub fn parse_quotes(json: &str) -> Result<ImportedFile, DomainError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = value
        .as_array()
        .ok_or_else(|| DomainError::Parse("Expected a JSON array of quotes".into()))?;

    let mut imported = ImportedFile::default();
    for item in items {
        let decoded = serde_json::from_value::<RawQuote>(item.clone())
            .map_err(DomainError::from)
            .and_then(|raw| Quote::new(raw.text, raw.category));
        match decoded {
            Ok(quote) => imported.quotes.push(quote),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed quote in import");
                imported.skipped += 1;
            }
        }
    }
    Ok(imported)
}

pub fn read_quotes(path: &Path) -> Result<ImportedFile, DomainError> {
    let json = std::fs::read_to_string(path)?;
    parse_quotes(&json)
}

pub fn render_quotes(quotes: &[Quote]) -> Result<String, DomainError> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

pub fn write_quotes(path: &Path, quotes: &[Quote]) -> Result<(), DomainError> {
    std::fs::write(path, render_quotes(quotes)?)?;
    Ok(())
}
