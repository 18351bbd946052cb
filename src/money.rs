// 💰 Price - Fixed-point decimal for product prices
// Exact decimal arithmetic: 25.50 and 25.5 are the SAME price (equal + same hash)

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of fractional digits a price can carry
pub const MAX_SCALE: u32 = 18;

const fn pow10(exp: u32) -> i128 {
    10i128.pow(exp)
}

// ============================================================================
// PARSE ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,

    #[error("invalid character {0:?} in price")]
    InvalidCharacter(char),

    #[error("price has {0} fractional digits, at most 18 are supported")]
    TooPrecise(usize),

    #[error("price is out of range")]
    Overflow,
}

// ============================================================================
// PRICE
// ============================================================================

/// Fixed-point decimal: `mantissa / 10^scale`
///
/// The scale is kept as written ("25.50" displays with two digits) but never
/// takes part in equality, ordering or hashing.
/// No sign validation: negative prices are legal values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    mantissa: i128,
    scale: u32,
}

impl Price {
    pub const ZERO: Price = Price { mantissa: 0, scale: 0 };

    /// Create price from mantissa and scale (`Price::new(2550, 2)` is 25.50)
    ///
    /// Scales above [`MAX_SCALE`] drop the excess digits (truncation).
    pub fn new(mantissa: i64, scale: u32) -> Self {
        let mut mantissa = mantissa as i128;
        let mut scale = scale;
        if scale > MAX_SCALE {
            let excess = scale - MAX_SCALE;
            mantissa /= pow10(excess.min(38));
            scale = MAX_SCALE;
        }
        Price { mantissa, scale }
    }

    /// Whole currency units, no fractional digits
    pub fn from_units(units: i64) -> Self {
        Price {
            mantissa: units as i128,
            scale: 0,
        }
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa > 0
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Same value with trailing fractional zeros removed (25.50 → 25.5)
    pub fn normalize(self) -> Price {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Price { mantissa, scale }
    }

    /// Round to `digits` fractional digits, midpoints away from zero
    pub fn round_dp(self, digits: u32) -> Price {
        if digits >= self.scale {
            return self;
        }

        let factor = pow10(self.scale - digits);
        let mut quotient = self.mantissa / factor;
        let remainder = self.mantissa % factor;
        if remainder.abs() * 2 >= factor {
            quotient += self.mantissa.signum();
        }

        Price {
            mantissa: quotient,
            scale: digits,
        }
    }

    /// Price multiplied by a quantity (saturating)
    pub fn times(self, quantity: i64) -> Price {
        Price {
            mantissa: self.mantissa.saturating_mul(quantity as i128),
            scale: self.scale,
        }
    }

    /// Integer part and fractional remainder, both carrying the sign
    fn split(&self) -> (i128, i128) {
        let factor = pow10(self.scale);
        (self.mantissa / factor, self.mantissa % factor)
    }

    /// Mantissa expressed at a larger scale (saturating)
    fn rescaled(&self, scale: u32) -> i128 {
        self.mantissa.saturating_mul(pow10(scale - self.scale))
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::ZERO
    }
}

// ============================================================================
// EQUALITY / ORDERING / HASH (scale-insensitive)
// ============================================================================

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        let (self_int, self_frac) = self.split();
        let (other_int, other_frac) = other.split();
        let scale = self.scale.max(other.scale);

        // Fractions stay below 10^18, so rescaling to 10^36 cannot overflow i128
        self_int.cmp(&other_int).then_with(|| {
            let self_frac = self_frac * pow10(scale - self.scale);
            let other_frac = other_frac * pow10(scale - other.scale);
            self_frac.cmp(&other_frac)
        })
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.mantissa.hash(state);
        normalized.scale.hash(state);
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        let scale = self.scale.max(rhs.scale);
        Price {
            mantissa: self.rescaled(scale).saturating_add(rhs.rescaled(scale)),
            scale,
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, price| acc + price)
    }
}

impl From<i32> for Price {
    fn from(units: i32) -> Self {
        Price::from_units(units as i64)
    }
}

impl From<i64> for Price {
    fn from(units: i64) -> Self {
        Price::from_units(units)
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let magnitude = self.mantissa.unsigned_abs();
        let factor = pow10(self.scale) as u128;
        let int_part = magnitude / factor;

        if self.scale == 0 {
            write!(f, "{}{}", sign, int_part)
        } else {
            let frac_part = magnitude % factor;
            write!(
                f,
                "{}{}.{:0width$}",
                sign,
                int_part,
                frac_part,
                width = self.scale as usize
            )
        }
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let (negative, digits) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (int_digits, frac_digits) = match digits.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, frac_digits),
            None => (digits, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if frac_digits.len() > MAX_SCALE as usize {
            return Err(PriceParseError::TooPrecise(frac_digits.len()));
        }

        let mut mantissa: i128 = 0;
        for c in int_digits.chars().chain(frac_digits.chars()) {
            let digit = c.to_digit(10).ok_or(PriceParseError::InvalidCharacter(c))?;
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit as i128))
                .ok_or(PriceParseError::Overflow)?;
        }

        Ok(Price {
            mantissa: if negative { -mantissa } else { mantissa },
            scale: frac_digits.len() as u32,
        })
    }
}

impl TryFrom<String> for Price {
    type Error = PriceParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Price {
    type Error = PriceParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
