//! Built-in Biofina product table

use once_cell::sync::Lazy;

use super::{Catalog, ProductRecord};

const PRODUCT_IMAGE_URL: &str =
    "https://img.freepik.com/free-vector/realistic-white-bottle-mock-up-pills_1017-17273.jpg";

static BIOFINA_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    records: biofina_products(),
});

/// The default catalog used when no catalog file is configured
pub fn biofina_catalog() -> &'static Catalog {
    &BIOFINA_CATALOG
}

fn product(title: &str, keywords: &[&str], slug: &str) -> ProductRecord {
    ProductRecord::new(title, keywords)
        .with_image_url(PRODUCT_IMAGE_URL)
        .with_buy_link(format!("https://example.com/buy/{}", slug))
}

fn biofina_products() -> Vec<ProductRecord> {
    vec![
        product(
            "Biofina Pain Relief",
            &["pain", "relief", "headache", "muscle", "ache", "fever", "acetaminophen"],
            "pain-relief",
        ),
        product(
            "Biofina Allergy Relief",
            &[
                "allergy",
                "allergies",
                "sneezing",
                "runny nose",
                "itchy",
                "eyes",
                "loratadine",
                "antihistamine",
                "non-drowsy",
            ],
            "allergy-relief",
        ),
        product(
            "Biofina Cold & Flu",
            &[
                "cold",
                "flu",
                "cough",
                "congestion",
                "fever",
                "sore throat",
                "dextromethorphan",
                "phenylephrine",
            ],
            "cold-flu",
        ),
        product(
            "Biofina Digestive Health",
            &["digestive", "stomach", "bloating", "gas", "bowel", "probiotic", "gut", "digestion"],
            "digestive-health",
        ),
        product(
            "Biofina Sleep Aid",
            &["sleep", "insomnia", "melatonin", "valerian", "chamomile", "rest", "drowsy", "dreams"],
            "sleep-aid",
        ),
    ]
}
