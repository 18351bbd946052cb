// 📦 Product Entity - Value record with custom equality, ordering and rendering
//
// "A product is its name and its price"
//
// - Equality / hash: (name, price) ONLY. stock and category never take part.
//   Two "Mouse @ 25.50" records are the same product whatever their stock.
// - Ordering: price alone, ascending. No tie-break (stable sorts keep input order).
// - Rendering: format specifier G / D / S, currency per locale.

use crate::locale::Locale;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use tracing::{debug, info};

/// Category assigned when a product is built without one
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// ============================================================================
// DESCRIBE TRAIT
// ============================================================================

/// Things that can describe and process themselves
pub trait Describe {
    /// Short human-readable description
    fn description(&self) -> String;

    /// Handle the item (emits an `info` event)
    fn process(&self);
}

// ============================================================================
// FORMAT SPECIFIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    /// "G" - name and price
    General,

    /// "D" - price, stock (or out of stock) and category
    Detailed,

    /// "S" - stock count only
    Stock,
}

impl FormatSpec {
    /// Parse a specifier (case-insensitive)
    ///
    /// Absent, empty and unrecognized specifiers all select `General`.
    /// Whitespace is not stripped: " D " is unrecognized.
    pub fn parse(spec: Option<&str>) -> FormatSpec {
        match spec {
            None | Some("") => FormatSpec::General,
            Some(s) if s.eq_ignore_ascii_case("G") => FormatSpec::General,
            Some(s) if s.eq_ignore_ascii_case("D") => FormatSpec::Detailed,
            Some(s) if s.eq_ignore_ascii_case("S") => FormatSpec::Stock,
            Some(other) => {
                debug!(spec = other, "unknown format specifier, using general format");
                FormatSpec::General
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatSpec::General => "G",
            FormatSpec::Detailed => "D",
            FormatSpec::Stock => "S",
        }
    }
}

// ============================================================================
// PRODUCT ENTITY
// ============================================================================

/// Product record
///
/// NOTE: `PartialEq`, `Eq` and `Hash` cover `name` and `price` only.
/// `stock` and `category` are carried along but are invisible to equality.
/// There is deliberately no `Ord`: ordering by price would disagree with
/// equality, use [`Product::compare`] / [`Product::cmp_by_price`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name (part of identity)
    pub name: String,

    /// Unit price (part of identity; negative values are accepted)
    pub price: Price,

    /// Units in stock (negative values are accepted)
    #[serde(default)]
    pub stock: i32,

    /// Category name, `DEFAULT_CATEGORY` when not given
    #[serde(default = "default_category")]
    pub category: String,
}

impl Product {
    /// Create product with no stock in the default category
    pub fn new(name: String, price: Price) -> Self {
        Self::with_details(name, price, 0, None)
    }

    /// Create product with stock and optional category
    pub fn with_details(name: String, price: Price, stock: i32, category: Option<String>) -> Self {
        Product {
            name,
            price,
            stock,
            category: category.unwrap_or_else(default_category),
        }
    }

    /// The category used when none is given
    pub fn default_category() -> &'static str {
        DEFAULT_CATEGORY
    }

    /// Order by price against a possibly absent product
    ///
    /// A missing counterpart sorts first: `compare(None)` is `Greater`.
    pub fn compare(&self, other: Option<&Product>) -> Ordering {
        match other {
            None => Ordering::Greater,
            Some(other) => self.price.cmp(&other.price),
        }
    }

    /// Comparator for `sort_by`: price ascending
    pub fn cmp_by_price(a: &Product, b: &Product) -> Ordering {
        a.compare(Some(b))
    }

    /// Equality against a possibly absent product (`None` is never equal)
    pub fn equals_opt(&self, other: Option<&Product>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Render with a format specifier and locale
    ///
    /// `None` locale uses this thread's current locale.
    pub fn render(&self, format: Option<&str>, locale: Option<&Locale>) -> String {
        match locale {
            Some(locale) => self.render_spec(FormatSpec::parse(format), locale),
            None => self.render_spec(FormatSpec::parse(format), &Locale::current()),
        }
    }

    /// Render with an already parsed specifier
    pub fn render_spec(&self, spec: FormatSpec, locale: &Locale) -> String {
        match spec {
            FormatSpec::General => {
                format!("{}: {}", self.name, locale.format_currency(self.price))
            }
            FormatSpec::Detailed if self.stock > 0 => format!(
                "{} - Price: {}, Stock: {}, Category: {}",
                self.name,
                locale.format_currency(self.price),
                self.stock,
                self.category
            ),
            FormatSpec::Detailed => format!(
                "{} - Price: {}, Out of Stock, Category: {}",
                self.name,
                locale.format_currency(self.price),
                self.category
            ),
            FormatSpec::Stock => format!("{} ({} in stock)", self.name, self.stock),
        }
    }

    /// Combine two products into a bundle
    ///
    /// Names joined with " & ", prices and stock summed, category from `self`
    /// (left operand wins, so `a.combine(b)` and `b.combine(a)` can differ).
    pub fn combine(&self, other: &Product) -> Product {
        Product {
            name: format!("{} & {}", self.name, other.name),
            price: self.price + other.price,
            stock: self.stock.wrapping_add(other.stock),
            category: self.category.clone(),
        }
    }

    /// Fixed summary, independent of any format specifier
    pub fn describe(&self) -> String {
        format!("Product: {}, Category: {}", self.name, self.category)
    }

    /// Split into (name, price, stock)
    pub fn into_parts(self) -> (String, Price, i32) {
        (self.name, self.price, self.stock)
    }
}

// ============================================================================
// EQUALITY / HASH (name + price)
// ============================================================================

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price == other.price
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.hash(state);
    }
}

// ============================================================================
// OPERATORS / CONVERSIONS
// ============================================================================

impl Add for Product {
    type Output = Product;

    fn add(self, rhs: Product) -> Product {
        self.combine(&rhs)
    }
}

impl Add for &Product {
    type Output = Product;

    fn add(self, rhs: &Product) -> Product {
        self.combine(rhs)
    }
}

impl From<Product> for (String, Price, i32) {
    fn from(product: Product) -> Self {
        product.into_parts()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_spec(FormatSpec::General, &Locale::current()))
    }
}

impl Describe for Product {
    fn description(&self) -> String {
        self.describe()
    }

    fn process(&self) {
        info!("Processing product: {}", self.name);
    }
}

// ============================================================================
// TESTS
// ============================================================================
