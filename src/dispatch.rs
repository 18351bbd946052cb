// 🏷️ Pattern Dispatcher - Classify arbitrary values by shape and content
// Rules as data: an ordered table of guarded rules, first match wins.
//
// Order matters: the integer and text rules split their shape with guards
// (positive, negative, then "whatever is left"), so a later rule may rely on
// every earlier rule having declined.

use crate::entities::product::{FormatSpec, Product};
use crate::locale::Locale;
use std::any::Any;
use std::fmt;
use tracing::debug;

// ============================================================================
// VALUE
// ============================================================================

/// Any value the dispatcher can be asked about
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    Integer(i32),

    Text(String),

    Record(Product),

    IntegerList(Vec<i32>),

    /// Anything else, known only by its type name
    Other(OpaqueValue),
}

/// A value of an unrecognized type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueValue {
    type_name: String,
}

impl OpaqueValue {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Value {
    /// Wrap a value of any type
    ///
    /// Types with a dedicated variant (`i32`, `String`, `&'static str`,
    /// `Vec<i32>`, `Product`, `Value`) land in that variant, so they still
    /// reach their own rules. Only foreign types become `Value::Other`.
    pub fn other<T: Any>(value: &T) -> Value {
        let any = value as &dyn Any;

        if let Some(value) = any.downcast_ref::<Value>() {
            return value.clone();
        }
        if let Some(number) = any.downcast_ref::<i32>() {
            return Value::Integer(*number);
        }
        if let Some(text) = any.downcast_ref::<String>() {
            return Value::Text(text.clone());
        }
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Value::Text(text.to_string());
        }
        if let Some(items) = any.downcast_ref::<Vec<i32>>() {
            return Value::IntegerList(items.clone());
        }
        if let Some(product) = any.downcast_ref::<Product>() {
            return Value::Record(product.clone());
        }

        Value::Other(OpaqueValue {
            type_name: short_type_name(std::any::type_name::<T>()),
        })
    }

    /// Runtime type name, without module paths
    ///
    /// Only `Other` names ever reach classification text; the rest are for
    /// callers inspecting a value (`Null` is caught by the first rule).
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "Null".to_string(),
            Value::Integer(_) => "i32".to_string(),
            Value::Text(_) => "String".to_string(),
            Value::Record(_) => "Product".to_string(),
            Value::IntegerList(_) => "Vec<i32>".to_string(),
            Value::Other(opaque) => opaque.type_name.clone(),
        }
    }
}

/// "alloc::vec::Vec<alloc::string::String>" → "Vec<String>"
fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else if c == ':' {
            segment.clear();
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(&segment);
    short
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Product> for Value {
    fn from(value: Product) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Value::IntegerList(value)
    }
}

impl From<&[i32]> for Value {
    fn from(value: &[i32]) -> Self {
        Value::IntegerList(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Outcome of classifying one value; `Display` gives the category text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    NullObject,
    PositiveInteger(i32),
    NegativeInteger(i32),
    Zero,
    /// Non-empty text
    Text(String),
    EmptyText,
    /// Product rendered in the general format
    Product(String),
    /// Integer list and its item count
    IntegerList(usize),
    /// Unrecognized type name
    Unknown(String),
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::NullObject => f.write_str("Null object"),
            Classification::PositiveInteger(i) => write!(f, "Positive integer: {}", i),
            Classification::NegativeInteger(i) => write!(f, "Negative integer: {}", i),
            Classification::Zero => f.write_str("Zero"),
            Classification::Text(s) => {
                write!(f, "String with length {}: {}", s.chars().count(), s)
            }
            Classification::EmptyText => f.write_str("Empty or null string"),
            Classification::Product(rendered) => write!(f, "Product: {}", rendered),
            Classification::IntegerList(count) => {
                write!(f, "Integer list with {} items", count)
            }
            Classification::Unknown(type_name) => write!(f, "Unknown type: {}", type_name),
        }
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// One guarded rule: returns a classification when it applies
#[derive(Clone, Copy)]
pub struct PatternRule {
    /// Rule ID for tracking
    pub id: &'static str,

    apply: fn(&Value) -> Option<Classification>,
}

impl PatternRule {
    pub fn apply(&self, value: &Value) -> Option<Classification> {
        (self.apply)(value)
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule").field("id", &self.id).finish()
    }
}

fn null_object(value: &Value) -> Option<Classification> {
    matches!(value, Value::Null).then_some(Classification::NullObject)
}

fn positive_integer(value: &Value) -> Option<Classification> {
    match value {
        Value::Integer(i) if *i > 0 => Some(Classification::PositiveInteger(*i)),
        _ => None,
    }
}

fn negative_integer(value: &Value) -> Option<Classification> {
    match value {
        Value::Integer(i) if *i < 0 => Some(Classification::NegativeInteger(*i)),
        _ => None,
    }
}

// Unguarded: only zero is left once the two rules above have declined
fn any_integer(value: &Value) -> Option<Classification> {
    matches!(value, Value::Integer(_)).then_some(Classification::Zero)
}

fn non_empty_text(value: &Value) -> Option<Classification> {
    match value {
        Value::Text(s) if !s.is_empty() => Some(Classification::Text(s.clone())),
        _ => None,
    }
}

fn any_text(value: &Value) -> Option<Classification> {
    matches!(value, Value::Text(_)).then_some(Classification::EmptyText)
}

fn product_record(value: &Value) -> Option<Classification> {
    match value {
        Value::Record(product) => Some(Classification::Product(
            product.render_spec(FormatSpec::General, &Locale::current()),
        )),
        _ => None,
    }
}

fn integer_list(value: &Value) -> Option<Classification> {
    match value {
        Value::IntegerList(items) => Some(Classification::IntegerList(items.len())),
        _ => None,
    }
}

fn unknown_type(value: &Value) -> Option<Classification> {
    Some(Classification::Unknown(value.type_name()))
}

/// Rules in evaluation order; the last one always applies
pub static RULES: [PatternRule; 9] = [
    PatternRule { id: "null", apply: null_object },
    PatternRule { id: "positive-integer", apply: positive_integer },
    PatternRule { id: "negative-integer", apply: negative_integer },
    PatternRule { id: "zero", apply: any_integer },
    PatternRule { id: "text", apply: non_empty_text },
    PatternRule { id: "empty-text", apply: any_text },
    PatternRule { id: "product", apply: product_record },
    PatternRule { id: "integer-list", apply: integer_list },
    PatternRule { id: "unknown", apply: unknown_type },
];

// ============================================================================
// DISPATCHER
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct PatternDispatcher {
    rules: &'static [PatternRule],
}

impl PatternDispatcher {
    pub fn new() -> Self {
        PatternDispatcher { rules: &RULES }
    }

    pub fn rules(&self) -> &[PatternRule] {
        self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Apply rules in order, returning the first match and its rule ID
    pub fn classify_with_rule(&self, value: &Value) -> (&'static str, Classification) {
        for rule in self.rules {
            if let Some(classification) = rule.apply(value) {
                debug!(rule = rule.id, "value classified");
                return (rule.id, classification);
            }
        }

        // Unreachable with RULES (catch-all last), kept total for custom tables
        ("unknown", Classification::Unknown(value.type_name()))
    }

    pub fn classify(&self, value: &Value) -> Classification {
        self.classify_with_rule(value).1
    }

    /// Classify each value independently
    pub fn classify_all(&self, values: &[Value]) -> Vec<Classification> {
        values.iter().map(|value| self.classify(value)).collect()
    }
}

impl Default for PatternDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Category text for a value
pub fn classify(value: &Value) -> String {
    PatternDispatcher::new().classify(value).to_string()
}

/// True only for a product whose price is strictly above zero
pub fn is_record_with_positive_price(value: &Value) -> bool {
    matches!(value, Value::Record(product) if product.price.is_positive())
}

/// Coarse check: text, then integer, then absent, else unknown
pub fn classify_primitive(value: &Value) -> String {
    match value {
        Value::Text(text) => format!("String: {}", text),
        Value::Integer(number) => format!("Integer: {}", number),
        Value::Null => "Null".to_string(),
        _ => "Unknown".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    fn laptop() -> Product {
        Product::with_details(
            "Laptop".to_string(),
            "999.99".parse().unwrap(),
            10,
            Some("Electronics".to_string()),
        )
    }

    #[test]
    fn test_integers() {
        assert_eq!(classify(&Value::from(0)), "Zero");
        assert_eq!(classify(&Value::from(5)), "Positive integer: 5");
        assert_eq!(classify(&Value::from(-5)), "Negative integer: -5");
        assert_eq!(
            classify(&Value::from(i32::MIN)),
            format!("Negative integer: {}", i32::MIN)
        );
    }

    #[test]
    fn test_text() {
        assert_eq!(classify(&Value::from("")), "Empty or null string");
        assert_eq!(classify(&Value::from("hi")), "String with length 2: hi");
        assert_eq!(classify(&Value::from("Hello")), "String with length 5: Hello");
        // Length counts characters, not bytes
        assert_eq!(classify(&Value::from("Café")), "String with length 4: Café");
    }

    #[test]
    fn test_null() {
        assert_eq!(classify(&Value::Null), "Null object");
        assert_eq!(classify(&Value::from(None::<String>)), "Null object");
        assert_eq!(classify(&Value::from(Some(3))), "Positive integer: 3");
    }

    #[test]
    fn test_product_uses_general_format() {
        let previous = Locale::set_current(Locale::en_us());
        assert_eq!(classify(&Value::from(laptop())), "Product: Laptop: $999.99");
        Locale::set_current(previous);
    }

    #[test]
    fn test_integer_list() {
        assert_eq!(
            classify(&Value::from(vec![1, 2, 3])),
            "Integer list with 3 items"
        );
        assert_eq!(
            classify(&Value::from(&[] as &[i32])),
            "Integer list with 0 items"
        );
    }

    #[test]
    fn test_unknown_type_names() {
        assert_eq!(classify(&Value::other(&3.14_f64)), "Unknown type: f64");
        assert_eq!(classify(&Value::other(&true)), "Unknown type: bool");
        assert_eq!(
            classify(&Value::other(&vec!["a".to_string()])),
            "Unknown type: Vec<String>"
        );
    }

    #[test]
    fn test_other_routes_known_types_to_their_rules() {
        assert_eq!(classify(&Value::other(&5_i32)), "Positive integer: 5");
        assert_eq!(classify(&Value::other(&0_i32)), "Zero");
        assert_eq!(
            classify(&Value::other(&String::from("hi"))),
            "String with length 2: hi"
        );
        assert_eq!(classify(&Value::other(&"")), "Empty or null string");
        assert_eq!(classify(&Value::other(&vec![1, 2])), "Integer list with 2 items");
        assert_eq!(classify(&Value::other(&Value::Null)), "Null object");
        assert!(classify(&Value::other(&laptop())).starts_with("Product: "));

        // Other integer widths are foreign types
        assert_eq!(classify(&Value::other(&5_i64)), "Unknown type: i64");
    }

    #[test]
    fn test_type_name_per_variant() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::from(1).type_name(), "i32");
        assert_eq!(Value::from("x").type_name(), "String");
        assert_eq!(Value::from(laptop()).type_name(), "Product");
        assert_eq!(Value::from(vec![1]).type_name(), "Vec<i32>");
        assert_eq!(Value::other(&1.5_f32).type_name(), "f32");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("f64"), "f64");
        assert_eq!(
            short_type_name("std::collections::hash::map::HashMap<alloc::string::String, i32>"),
            "HashMap<String, i32>"
        );
        assert_eq!(short_type_name("(i32, core::option::Option<u8>)"), "(i32, Option<u8>)");
    }

    #[test]
    fn test_rule_order_and_ids() {
        let dispatcher = PatternDispatcher::new();
        assert_eq!(dispatcher.rule_count(), 9);

        let cases = [
            (Value::Null, "null"),
            (Value::from(1), "positive-integer"),
            (Value::from(-1), "negative-integer"),
            (Value::from(0), "zero"),
            (Value::from("x"), "text"),
            (Value::from(""), "empty-text"),
            (Value::from(laptop()), "product"),
            (Value::from(vec![7]), "integer-list"),
            (Value::other(&'c'), "unknown"),
        ];

        for (value, expected) in cases {
            assert_eq!(dispatcher.classify_with_rule(&value).0, expected);
        }
    }

    #[test]
    fn test_catch_all_only_for_other() {
        let dispatcher = PatternDispatcher::new();
        let recognized = [
            Value::Null,
            Value::from(i32::MAX),
            Value::from(""),
            Value::from(laptop()),
            Value::from(Vec::<i32>::new()),
        ];

        for value in &recognized {
            assert!(!matches!(dispatcher.classify(value), Classification::Unknown(_)));
        }
    }

    #[test]
    fn test_classify_all() {
        let values = vec![Value::from(42), Value::from(-5), Value::from("Hello")];
        let texts: Vec<String> = PatternDispatcher::new()
            .classify_all(&values)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            texts,
            vec![
                "Positive integer: 42",
                "Negative integer: -5",
                "String with length 5: Hello"
            ]
        );
    }

    #[test]
    fn test_is_record_with_positive_price() {
        assert!(is_record_with_positive_price(&Value::from(laptop())));

        let free = Product::new("Sample".to_string(), Price::ZERO);
        assert!(!is_record_with_positive_price(&Value::from(free)));

        let negative = Product::new("Refund".to_string(), Price::new(-1, 2));
        assert!(!is_record_with_positive_price(&Value::from(negative)));

        assert!(!is_record_with_positive_price(&Value::from(5)));
        assert!(!is_record_with_positive_price(&Value::Null));
    }

    #[test]
    fn test_classify_primitive() {
        assert_eq!(classify_primitive(&Value::from("Hello")), "String: Hello");
        assert_eq!(classify_primitive(&Value::from("")), "String: ");
        assert_eq!(classify_primitive(&Value::from(7)), "Integer: 7");
        assert_eq!(classify_primitive(&Value::Null), "Null");
        assert_eq!(classify_primitive(&Value::from(laptop())), "Unknown");
        assert_eq!(classify_primitive(&Value::from(vec![1])), "Unknown");
    }
}
