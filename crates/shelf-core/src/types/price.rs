//! Price type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A non-negative, finite book price.
///
/// # Example
///
/// ```
/// use shelf_core::Price;
///
/// let price: Price = "12.50".parse().unwrap();
/// assert_eq!(price.to_string(), "12.50");
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a new price, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(InvalidInputError::Price {
                value: value.to_string(),
                reason: "must be a finite number".to_string(),
            }
            .into());
        }
        if value < 0.0 {
            return Err(InvalidInputError::Price {
                value: value.to_string(),
                reason: "cannot be negative".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<f64>().map_err(|e| InvalidInputError::Price {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Price {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
