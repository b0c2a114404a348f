//! Keyword-based category inference.

use crate::models::slip::Category;

/// Ordered keyword groups. The first group with a keyword contained in
/// the lower-cased merchant name wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Groceries, &["7-eleven", "lotus", "big c", "tops"]),
    (Category::FoodAndDining, &["minor", "restaurant", "cafe", "food"]),
    (Category::Utilities, &["dtac", "ais", "true"]),
    (Category::Transportation, &["bts", "grab", "bolt"]),
];

/// Infer a spending category from the merchant name.
///
/// Best-effort default for the form, expected to be wrong often and
/// always user-overridable. Unrecognized merchants land in Shopping.
pub fn infer_category(merchant: &str) -> Category {
    let merchant = merchant.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| merchant.contains(k)) {
            return *category;
        }
    }

    Category::Shopping
}
