// 🌍 Locale - Currency formatting conventions
// A locale is plain data: symbol, separators, digits, symbol placement.
// Each thread has a "current" locale used when a caller supplies none.

use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

// ============================================================================
// SYMBOL PLACEMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPlacement {
    /// "$1.00"
    Before,

    /// "CHF 1.00"
    BeforeSpaced,

    /// "1.00€"
    After,

    /// "1,00 €"
    AfterSpaced,
}

impl SymbolPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolPlacement::Before => "Before",
            SymbolPlacement::BeforeSpaced => "BeforeSpaced",
            SymbolPlacement::After => "After",
            SymbolPlacement::AfterSpaced => "AfterSpaced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown locale: {0:?}")]
    Unknown(String),
}

// ============================================================================
// LOCALE
// ============================================================================

/// Currency formatting conventions for one culture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// BCP-47 style tag (e.g., "en-US"); empty for the invariant locale
    pub tag: String,

    /// Currency symbol (e.g., "$", "€")
    pub currency_symbol: String,

    pub decimal_separator: String,

    pub group_separator: String,

    /// Fractional digits shown for currency amounts
    #[serde(default = "default_currency_digits")]
    pub currency_digits: u32,

    pub symbol_placement: SymbolPlacement,
}

fn default_currency_digits() -> u32 {
    2
}

// Non-breaking spaces, as printed by common culture data
const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

impl Locale {
    pub fn en_us() -> Self {
        Locale::builtin("en-US", "$", ".", ",", 2, SymbolPlacement::Before)
    }

    pub fn en_gb() -> Self {
        Locale::builtin("en-GB", "£", ".", ",", 2, SymbolPlacement::Before)
    }

    pub fn de_de() -> Self {
        Locale::builtin("de-DE", "€", ",", ".", 2, SymbolPlacement::AfterSpaced)
    }

    pub fn fr_fr() -> Self {
        Locale::builtin("fr-FR", "€", ",", NARROW_NBSP, 2, SymbolPlacement::AfterSpaced)
    }

    pub fn ja_jp() -> Self {
        Locale::builtin("ja-JP", "¥", ".", ",", 0, SymbolPlacement::Before)
    }

    /// Culture-neutral conventions with the generic currency sign
    pub fn invariant() -> Self {
        Locale::builtin("", "¤", ".", ",", 2, SymbolPlacement::Before)
    }

    fn builtin(
        tag: &str,
        currency_symbol: &str,
        decimal_separator: &str,
        group_separator: &str,
        currency_digits: u32,
        symbol_placement: SymbolPlacement,
    ) -> Self {
        Locale {
            tag: tag.to_string(),
            currency_symbol: currency_symbol.to_string(),
            decimal_separator: decimal_separator.to_string(),
            group_separator: group_separator.to_string(),
            currency_digits,
            symbol_placement,
        }
    }

    /// All locales known without configuration
    pub fn all_builtin() -> Vec<Locale> {
        vec![
            Locale::en_us(),
            Locale::en_gb(),
            Locale::de_de(),
            Locale::fr_fr(),
            Locale::ja_jp(),
            Locale::invariant(),
        ]
    }

    /// Look up a built-in locale by tag
    ///
    /// Case-insensitive, accepts "_" in place of "-".
    /// "invariant" and the empty tag both select the invariant locale.
    pub fn from_tag(tag: &str) -> Result<Locale, LocaleError> {
        let wanted = normalize_tag(tag);
        if wanted == "invariant" {
            return Ok(Locale::invariant());
        }

        Locale::all_builtin()
            .into_iter()
            .find(|locale| normalize_tag(&locale.tag) == wanted)
            .ok_or_else(|| LocaleError::Unknown(tag.to_string()))
    }

    /// Format a price as a currency amount
    ///
    /// Rounds to `currency_digits` (midpoint away from zero), groups the
    /// integer digits by thousands, places the sign before everything.
    pub fn format_currency(&self, price: Price) -> String {
        let rounded = price.round_dp(self.currency_digits);
        let plain = rounded.to_string();
        let (negative, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, plain.as_str()),
        };

        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut number = group_thousands(int_digits, &self.group_separator);
        if self.currency_digits > 0 {
            number.push_str(&self.decimal_separator);
            number.push_str(frac_digits);
            for _ in frac_digits.len()..self.currency_digits as usize {
                number.push('0');
            }
        }

        let amount = match self.symbol_placement {
            SymbolPlacement::Before => format!("{}{}", self.currency_symbol, number),
            SymbolPlacement::BeforeSpaced => format!("{}{}{}", self.currency_symbol, NBSP, number),
            SymbolPlacement::After => format!("{}{}", number, self.currency_symbol),
            SymbolPlacement::AfterSpaced => format!("{}{}{}", number, NBSP, self.currency_symbol),
        };

        if negative {
            format!("-{}", amount)
        } else {
            amount
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::en_us()
    }
}

fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim().replace('_', "-").to_lowercase();
    if tag.is_empty() {
        "invariant".to_string()
    } else {
        tag
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

// ============================================================================
// CURRENT LOCALE (per thread)
// ============================================================================

thread_local! {
    static CURRENT_LOCALE: RefCell<Locale> = RefCell::new(Locale::en_us());
}

impl Locale {
    /// Locale used when a caller renders without supplying one
    pub fn current() -> Locale {
        CURRENT_LOCALE.with(|current| current.borrow().clone())
    }

    /// Replace this thread's current locale, returning the previous one
    pub fn set_current(locale: Locale) -> Locale {
        CURRENT_LOCALE.with(|current| current.replace(locale))
    }
}

// ============================================================================
// TESTS
// ============================================================================
