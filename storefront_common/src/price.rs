use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------      Price       ------------------------------------------------------------
/// A monetary amount in the storefront's display currency.
///
/// Prices are carried as plain decimals on the wire (`29.99`), so the wrapper is transparent for serde purposes.
/// Arithmetic is only ever sums of catalog prices scaled by small integer quantities, so floating point is an
/// acceptable representation here.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a price: {0}")]
pub struct PriceConversionError(String);

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl TryFrom<Price> for f64 {
    type Error = PriceConversionError;

    fn try_from(value: Price) -> Result<Self, Self::Error> {
        if value.0.is_finite() {
            Ok(value.0)
        } else {
            Err(PriceConversionError(format!("{} is not a finite amount", value.0)))
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * f64::from(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:0.2}", self.0)
    }
}

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}
