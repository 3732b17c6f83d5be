//! Product records and the ordered catalog they live in

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single product the assistant can recommend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display name, unique within a catalog
    pub title: String,
    /// Lowercase indication terms and phrases
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
}

impl ProductRecord {
    pub fn new<I, S>(title: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            keywords: keywords.into_iter().map(|k| normalize_keyword(k.as_ref())).collect(),
            image_url: None,
            buy_link: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_buy_link(mut self, link: impl Into<String>) -> Self {
        self.buy_link = Some(link.into());
        self
    }

    /// Image reference, ignoring blank values
    pub fn image(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }

    /// Purchase link, ignoring blank values
    pub fn purchase_link(&self) -> Option<&str> {
        non_blank(self.buy_link.as_deref())
    }

    fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.keywords = self
            .keywords
            .iter()
            .map(|k| normalize_keyword(k))
            .filter(|k| !k.is_empty())
            .collect();
        self
    }
}

fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Static, ordered list of products.
///
/// Order is significant: it breaks ties between equally scored records,
/// first-listed wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(super) records: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate titles
    pub fn new(records: Vec<ProductRecord>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut normalized = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            let record = record.normalized();

            if record.title.is_empty() {
                return Err(DomainError::catalog(format!(
                    "Product at position {} has an empty title",
                    position
                )));
            }

            if !seen.insert(record.title.to_lowercase()) {
                return Err(DomainError::catalog(format!(
                    "Duplicate product title '{}'",
                    record.title
                )));
            }

            normalized.push(record);
        }

        Ok(Self {
            records: normalized,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup by title
    pub fn get(&self, title: &str) -> Option<&ProductRecord> {
        let wanted = title.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_keywords_are_lowercased() {
        let record = ProductRecord::new("Biofina Pain Relief", ["Headache", " FEVER "]);
        assert_eq!(record.keywords, vec!["headache", "fever"]);
    }

    #[test]
    fn test_blank_links_are_ignored() {
        let record = ProductRecord::new("Biofina Sleep Aid", ["sleep"])
            .with_image_url("  ")
            .with_buy_link("https://example.com/buy/sleep-aid");

        assert_eq!(record.image(), None);
        assert_eq!(record.purchase_link(), Some("https://example.com/buy/sleep-aid"));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            ProductRecord::new("Second", ["b"]),
            ProductRecord::new("First", ["a"]),
        ])
        .unwrap();

        let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_titles() {
        let result = Catalog::new(vec![
            ProductRecord::new("Biofina Cold & Flu", ["cold"]),
            ProductRecord::new("biofina cold & flu", ["flu"]),
        ]);

        assert!(matches!(result, Err(DomainError::Catalog { .. })));
    }

    #[test]
    fn test_catalog_rejects_empty_title() {
        let result = Catalog::new(vec![ProductRecord::new("   ", ["cold"])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_normalizes_deserialized_keywords() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"title": " Biofina Allergy Relief ", "keywords": ["Sneezing", ""]}"#,
        )
        .unwrap();
        let catalog = Catalog::new(vec![record]).unwrap();

        let stored = &catalog.records()[0];
        assert_eq!(stored.title, "Biofina Allergy Relief");
        assert_eq!(stored.keywords, vec!["sneezing"]);
        assert!(stored.image_url.is_none());
    }

    #[test]
    fn test_catalog_lookup_is_case_insensitive() {
        let catalog = Catalog::new(vec![ProductRecord::new("Biofina Sleep Aid", ["sleep"])]).unwrap();

        assert!(catalog.get("biofina sleep aid").is_some());
        assert!(catalog.get("Biofina Pain Relief").is_none());
        assert!(Catalog::empty().is_empty());
    }
}
