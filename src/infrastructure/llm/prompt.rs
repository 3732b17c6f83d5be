//! Prompt assembly for the MedAssist persona

use std::fmt::Write;

use crate::domain::ProductRecord;

/// System instruction describing the assistant and the Biofina range
pub const SYSTEM_PROMPT: &str = "You are MedAssist, an AI medical assistant created by Biofina Pharmaceuticals. \
Your purpose is to provide helpful information about symptoms and suggest appropriate \
Biofina medications that might help with those symptoms. Be empathetic, professional, and detailed.

Biofina Pharmaceuticals offers the following medications:
1. Biofina Pain Relief - for headaches, muscle aches, and fever reduction. Contains acetaminophen. \
Side effects may include nausea and drowsiness. Not recommended for liver conditions.
2. Biofina Allergy Relief - for seasonal allergies, providing 24-hour relief from sneezing, runny nose, and itchy eyes. \
Contains loratadine, a non-drowsy formula. Side effects may include dry mouth and headache.
3. Biofina Cold & Flu - for symptom relief of common cold and influenza. Contains acetaminophen, dextromethorphan, and phenylephrine. \
May cause drowsiness. Not recommended for high blood pressure.
4. Biofina Digestive Health - a probiotic supplement supporting gut health and digestion. \
Contains beneficial bacteria including Lactobacillus and Bifidobacterium strains. Helps with bloating and gas.
5. Biofina Sleep Aid - a non-habit forming sleep supplement with melatonin, valerian root, and chamomile. \
Helps reduce time to fall asleep. May cause vivid dreams. Not for pregnant women.

When responding to users, provide detailed information about these medications based on their symptoms or questions. \
Include dosage information, side effects, and contraindications when relevant. \
Always remind users to consult healthcare professionals before starting any medication.";

const FORMAT_INSTRUCTIONS: &str = "Please format your response in markdown. If relevant, include HTML for images and 'Buy Now' buttons. Make your response visually appealing.";

/// Matched-product block placed ahead of the question; empty when nothing matched
pub fn context_block(records: &[ProductRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut context = String::from("Based on your question, these medications might be relevant:\n\n");

    for record in records {
        let _ = writeln!(context, "- {}", record.title);

        if let Some(image) = record.image() {
            let _ = writeln!(context, "  Image available at: {}", image);
        }

        if let Some(link) = record.purchase_link() {
            let _ = writeln!(context, "  Purchase link: {}", link);
        }

        context.push('\n');
    }

    context.push_str("Please provide detailed information about these medications in your response. ");
    context.push_str(
        "If appropriate, include the image URLs and purchase links in your response using HTML.\n",
    );
    context
}

/// User turn: context, the question and formatting instructions
pub fn user_prompt(query: &str, records: &[ProductRecord]) -> String {
    format!(
        "{}\n\nUser Question: {}\n\n{}",
        context_block(records),
        query,
        FORMAT_INSTRUCTIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        assert_eq!(context_block(&[]), "");

        let prompt = user_prompt("hello", &[]);
        assert!(prompt.starts_with("\n\nUser Question: hello\n\n"));
    }

    #[test]
    fn test_context_lists_records_and_links() {
        let records = vec![
            ProductRecord::new("Biofina Sleep Aid", ["sleep"])
                .with_buy_link("https://example.com/buy/sleep-aid"),
            ProductRecord::new("Biofina Pain Relief", ["pain"]).with_image_url("https://img/x.jpg"),
        ];

        let context = context_block(&records);

        assert!(context.starts_with("Based on your question, these medications might be relevant:\n\n"));
        assert!(context.contains("- Biofina Sleep Aid\n  Purchase link: https://example.com/buy/sleep-aid\n"));
        assert!(context.contains("- Biofina Pain Relief\n  Image available at: https://img/x.jpg\n"));
        assert!(!context.contains("Image available at: \n"));
    }

    #[test]
    fn test_system_prompt_names_every_product() {
        for title in [
            "Biofina Pain Relief",
            "Biofina Allergy Relief",
            "Biofina Cold & Flu",
            "Biofina Digestive Health",
            "Biofina Sleep Aid",
        ] {
            assert!(SYSTEM_PROMPT.contains(title));
        }
    }
}
