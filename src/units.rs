//! Strongly typed unit markers and quantity wrappers.
//!
//! A [`Quantity`] pairs a scalar value with a zero-sized unit marker so the
//! API surface states what a number means; `Display` appends the SI symbol.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for SI units carried by [`Quantity`].
pub trait Unit {
    /// SI symbol appended when the quantity is displayed.
    const SYMBOL: &'static str;
}

/// Tesla (magnetic flux density).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tesla;
impl Unit for Tesla {
    const SYMBOL: &'static str = "T";
}

/// Ampere (electric current).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ampere;
impl Unit for Ampere {
    const SYMBOL: &'static str = "A";
}

/// Meter (length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter;
impl Unit for Meter {
    const SYMBOL: &'static str = "m";
}

/// Scalar value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<U: Unit> {
    value: Scalar,
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    /// Wraps a raw scalar in the unit marker.
    #[must_use]
    pub const fn new(value: Scalar) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw scalar value.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6e} {}", self.value, U::SYMBOL)
    }
}

/// Magnetic flux density in tesla.
pub type FluxDensity = Quantity<Tesla>;
/// Electric current in amperes.
pub type Current = Quantity<Ampere>;
/// Length in meters.
pub type Length = Quantity<Meter>;
