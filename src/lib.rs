// Product Patterns - Core Library
// Product value model (equality, ordering, rendering) and the pattern dispatcher

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod entities;
pub mod locale;
pub mod money;

// Re-export commonly used types
pub use catalog::{dedup, find_duplicates, sort_by_price, total_value, DuplicateMatch};
pub use config::ShowcaseConfig;
pub use dispatch::{
    classify, classify_primitive, is_record_with_positive_price, Classification, OpaqueValue,
    PatternDispatcher, PatternRule, Value,
};
pub use entities::{Describe, FormatSpec, Product, DEFAULT_CATEGORY};
pub use locale::{Locale, LocaleError, SymbolPlacement};
pub use money::{Price, PriceParseError, MAX_SCALE};
