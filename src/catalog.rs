// 🔍 Catalog Helpers - Sort and deduplicate product lists
// Everything here leans on Product's contracts:
// - sorting uses the price comparator (stable, ties keep input order)
// - duplicates use name + price equality (stock and category ignored)

use crate::entities::product::Product;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// SORTING
// ============================================================================

/// Sort by price ascending, keeping input order for equal prices
pub fn sort_by_price(products: &mut [Product]) {
    products.sort_by(Product::cmp_by_price);
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    /// Index of the first occurrence
    pub first_index: usize,

    /// Index of the later duplicate
    pub duplicate_index: usize,

    /// Human-readable reason
    pub reason: String,
}

/// Keep the first occurrence of each product (by name + price)
pub fn dedup(products: &[Product]) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|product| seen.insert(*product))
        .cloned()
        .collect()
}

/// Every later product that equals an earlier one, paired with the first occurrence
pub fn find_duplicates(products: &[Product]) -> Vec<DuplicateMatch> {
    let mut matches = Vec::new();

    for j in 0..products.len() {
        // Only the first occurrence is reported as the original
        if let Some(i) = (0..j).find(|&i| products[i] == products[j]) {
            let (first, duplicate) = (&products[i], &products[j]);
            matches.push(DuplicateMatch {
                first_index: i,
                duplicate_index: j,
                reason: format!(
                    "Same name and price: {} @ {} (stock {} vs {})",
                    first.name, first.price, first.stock, duplicate.stock
                ),
            });
        }
    }

    matches
}

// ============================================================================
// TOTALS
// ============================================================================

/// Sum of price × stock over all products
pub fn total_value(products: &[Product]) -> Price {
    products
        .iter()
        .map(|product| product.price.times(product.stock as i64))
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================
