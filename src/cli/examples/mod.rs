//! Examples command - questions to try, grouped by category

/// Example questions shown to new users
pub const EXAMPLE_QUESTIONS: [(&str, [&str; 3]); 3] = [
    (
        "Symptoms",
        [
            "What can help with my headache?",
            "I have allergies, what should I take?",
            "What's good for trouble sleeping?",
        ],
    ),
    (
        "Products",
        [
            "Tell me about Biofina Pain Relief",
            "What are the side effects of Sleep Aid?",
            "Compare Cold & Flu and Allergy Relief",
        ],
    ),
    (
        "Usage",
        [
            "Can I take Pain Relief with alcohol?",
            "How often should I take Digestive Health?",
            "Is Cold & Flu safe during pregnancy?",
        ],
    ),
];

pub fn run() -> anyhow::Result<()> {
    print!("{}", format_examples());
    Ok(())
}

fn format_examples() -> String {
    let mut out = String::new();
    for (category, questions) in EXAMPLE_QUESTIONS {
        out.push_str(category);
        out.push('\n');
        for question in questions {
            out.push_str("  - ");
            out.push_str(question);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{biofina_catalog, score_and_rank};

    #[test]
    fn test_format_examples() {
        let text = format_examples();
        assert!(text.starts_with("Symptoms\n  - What can help with my headache?\n"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_symptom_examples_match_a_product() {
        let (_, questions) = EXAMPLE_QUESTIONS[0];
        for question in questions {
            let ranked = score_and_rank(question, biofina_catalog().records(), 2);
            assert!(!ranked.is_empty(), "no match for {:?}", question);
        }
    }
}
