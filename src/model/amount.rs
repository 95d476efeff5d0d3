//! Amount type for monetary values read from the sheet.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles parsing cell values
//! that may carry a `$` or `R$` currency marker and thousands separators. `R$` values use
//! Brazilian conventions (`.` for thousands, `,` for decimals); everything else uses US
//! conventions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use tracing::warn;

/// A monetary amount parsed from a spreadsheet cell.
///
/// Display always normalizes to dollar-style formatting (`-$1,234.56`); amounts are only ever
/// rendered into prompts and tables, never written back to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parses a cell value, coercing anything unparseable to zero with a warning. This matches
    /// how the cleaning step treats amounts: a cell that reads `"N/A"` contributes nothing to
    /// the totals rather than aborting the run.
    pub fn parse_lossy(s: &str) -> Self {
        match Self::from_str(s) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Treating unparseable amount '{s}' as zero: {e}");
                Amount::default()
            }
        }
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }

        // Pull a leading minus off so the currency marker can be stripped either way:
        // "-$50.00" and "$-50.00" are both seen in the wild.
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let normalized = if let Some(rest) = unsigned.strip_prefix("R$") {
            // Brazilian formatting: "R$ 1.234,56"
            rest.trim().replace(' ', "").replace('.', "").replace(',', ".")
        } else {
            let rest = unsigned.strip_prefix('$').unwrap_or(unsigned);
            rest.trim().replace(',', "")
        };

        let (negative, digits) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (negative, normalized.as_str()),
        };

        let value = Decimal::from_str(digits).map_err(AmountError)?;
        Ok(Amount(if negative { -value } else { value }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            ("-", self.0.abs())
        } else {
            ("", self.0)
        };
        write!(
            f,
            "{sign}${}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::from_str("$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_without_dollar_sign() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::from_str("-$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
        assert!(amount.is_negative());
    }

    #[test]
    fn test_parse_sign_after_dollar() {
        let amount = Amount::from_str("$-50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_parse_with_commas() {
        let amount = Amount::from_str("-$60,000.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-60000.00").unwrap());
    }

    #[test]
    fn test_parse_brazilian() {
        let amount = Amount::from_str("R$ 1.234,56").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1234.56").unwrap());

        let negative = Amount::from_str("-R$ 1.234,56").unwrap();
        assert_eq!(negative.value(), Decimal::from_str("-1234.56").unwrap());
    }

    #[test]
    fn test_parse_empty_string() {
        let amount = Amount::from_str("").unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  $50.00  ").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_lossy_garbage_is_zero() {
        let amount = Amount::parse_lossy("N/A");
        assert!(amount.is_zero());
    }

    #[test]
    fn test_parse_lossy_valid() {
        let amount = Amount::parse_lossy("-$12.50");
        assert_eq!(amount.value(), Decimal::from_str("-12.50").unwrap());
    }

    #[test]
    fn test_display() {
        let amount = Amount::from_str("-1234.5").unwrap();
        assert_eq!(amount.to_string(), "-$1,234.50");

        let zero = Amount::default();
        assert_eq!(zero.to_string(), "$0.00");
    }

    #[test]
    fn test_serialize() {
        let amount = Amount::from_str("50").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"$50.00\"");
    }

    #[test]
    fn test_deserialize() {
        let amount: Amount = serde_json::from_str("\"-$50.00\"").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_ordering() {
        let a1 = Amount::from_str("$30.00").unwrap();
        let a2 = Amount::from_str("$50.00").unwrap();
        assert!(a1 < a2);
    }
}
