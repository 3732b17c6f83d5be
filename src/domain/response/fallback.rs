//! Deterministic reply templates used when no generative backend answers

use std::fmt::Write;

use serde::Deserialize;

use super::reminder::CONSULTATION_REMINDER;
use crate::domain::matching::RankedResult;

const DEFAULT_BRAND: &str = "Biofina";

const DEFAULT_CATEGORIES: [&str; 5] = [
    "pain relief",
    "allergies",
    "cold & flu",
    "digestive health",
    "sleep aid",
];

const BUY_BUTTON_STYLE: &str = "color: white; background-color: #4CAF50; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer;";

/// Wording of the fallback replies
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FallbackTemplates {
    /// Brand name used in the apology
    pub brand: String,
    /// General product categories listed when nothing matches
    pub categories: Vec<String>,
}

impl Default for FallbackTemplates {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl FallbackTemplates {
    pub fn new(brand: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            brand: brand.into(),
            categories,
        }
    }

    /// Render the reply for `ranked`, apologizing when it is empty
    pub fn render(&self, ranked: &RankedResult) -> String {
        if ranked.is_empty() {
            self.no_match()
        } else {
            self.matched(ranked)
        }
    }

    /// Apology listing the catalog's general categories
    pub fn no_match(&self) -> String {
        format!(
            "I'm sorry, I don't have specific information about that in our {brand} product database. \
             {brand} Pharmaceuticals offers medications for {categories}. \
             If you're looking for information about these categories, please let me know. \
             For all medical concerns, please consult with a healthcare professional.",
            brand = self.brand,
            categories = join_categories(&self.categories),
        )
    }

    fn matched(&self, ranked: &RankedResult) -> String {
        let mut response = format!(
            "Based on your query, these medications might be helpful: {}\n\n",
            ranked.titles().join(", ")
        );

        for record in ranked.records() {
            let _ = write!(response, "**{}**\n\n", record.title);

            if let Some(image) = record.image() {
                let _ = write!(response, "<img src='{}' width='200'/>\n\n", image);
            }

            if let Some(link) = record.purchase_link() {
                let _ = write!(
                    response,
                    "<a href='{}' target='_blank'><button style='{}'>Buy Now</button></a>\n\n",
                    link, BUY_BUTTON_STYLE
                );
            }
        }

        response.push_str(CONSULTATION_REMINDER);
        response
    }
}

/// "a", "a and b", "a, b, and c"
fn join_categories(categories: &[String]) -> String {
    match categories {
        [] => "a range of everyday health needs".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{biofina_catalog, ProductRecord};
    use crate::domain::matching::{score_and_rank, ScoredMatch};
    use crate::domain::response::reminder::has_reminder;

    #[test]
    fn test_no_match_lists_categories() {
        let text = FallbackTemplates::default().render(&RankedResult::empty());

        assert_eq!(
            text,
            "I'm sorry, I don't have specific information about that in our Biofina product database. \
             Biofina Pharmaceuticals offers medications for pain relief, allergies, cold & flu, \
             digestive health, and sleep aid. If you're looking for information about these \
             categories, please let me know. For all medical concerns, please consult with a \
             healthcare professional."
        );
        assert!(has_reminder(&text));
    }

    #[test]
    fn test_matched_lists_titles_and_assets() {
        let ranked = score_and_rank("fever", biofina_catalog().records(), 2);
        let text = FallbackTemplates::default().render(&ranked);

        assert!(text.starts_with(
            "Based on your query, these medications might be helpful: Biofina Pain Relief, Biofina Cold & Flu\n\n"
        ));
        assert!(text.contains("**Biofina Pain Relief**"));
        assert!(text.contains("<img src='https://img.freepik.com/"));
        assert!(text.contains("<a href='https://example.com/buy/cold-flu'"));
        assert!(text.find("**Biofina Pain Relief**") < text.find("**Biofina Cold & Flu**"));
        assert!(text.ends_with(CONSULTATION_REMINDER));
    }

    #[test]
    fn test_matched_skips_missing_assets() {
        let ranked: RankedResult = vec![ScoredMatch {
            record: ProductRecord::new("Plain Product", ["plain"]),
            score: 3,
        }]
        .into_iter()
        .collect();

        let text = FallbackTemplates::default().render(&ranked);

        assert!(text.contains("**Plain Product**"));
        assert!(!text.contains("<img"));
        assert!(!text.contains("Buy Now"));
    }

    #[test]
    fn test_join_categories() {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(join_categories(&owned(&["colds"])), "colds");
        assert_eq!(join_categories(&owned(&["colds", "sleep"])), "colds and sleep");
        assert_eq!(
            join_categories(&owned(&["colds", "sleep", "pain"])),
            "colds, sleep, and pain"
        );
    }

    #[test]
    fn test_custom_brand() {
        let templates = FallbackTemplates::new("Acme", vec!["vitamins".to_string()]);
        let text = templates.no_match();

        assert!(text.contains("our Acme product database"));
        assert!(text.contains("Acme Pharmaceuticals offers medications for vitamins."));
    }
}
