//! JSON file catalog source
//!
//! The file holds an array of product records:
//! `[{"title": "...", "keywords": ["..."], "image_url": "...", "buy_link": "..."}]`

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{Catalog, DomainError, ProductRecord};

/// Loads a catalog from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Catalog, DomainError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let catalog = Self::parse(&raw)?;
        info!(
            path = %self.path.display(),
            products = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn parse(raw: &str) -> Result<Catalog, DomainError> {
        let records: Vec<ProductRecord> = serde_json::from_str(raw)
            .map_err(|e| DomainError::catalog(format!("Invalid catalog JSON: {}", e)))?;

        Catalog::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Biofina Pain Relief", "keywords": ["pain", "Headache"],
                  "buy_link": "https://example.com/buy/pain-relief"}},
                {{"title": "Biofina Sleep Aid", "keywords": ["sleep"]}}
            ]"#
        )
        .unwrap();

        let catalog = JsonCatalogSource::new(file.path()).load().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].keywords, vec!["pain", "headache"]);
        assert_eq!(
            catalog.records()[0].purchase_link(),
            Some("https://example.com/buy/pain-relief")
        );
        assert!(catalog.records()[1].image().is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = JsonCatalogSource::new("/nonexistent/catalog.json").load();
        assert!(matches!(result, Err(DomainError::Catalog { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let result = JsonCatalogSource::parse("{not json");
        assert!(matches!(result, Err(DomainError::Catalog { .. })));
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let result = JsonCatalogSource::parse(
            r#"[{"title": "Sleep"}, {"title": "sleep", "keywords": ["rest"]}]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_array_is_empty_catalog() {
        let catalog = JsonCatalogSource::parse("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
