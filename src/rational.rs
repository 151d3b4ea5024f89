//! Exact rational numbers over native 64-bit integers
//!
//! A `Rational` is an immutable numerator/denominator pair. Every operation
//! returns a new, normalized value: lowest terms, sign on the numerator.
//!
//! A denominator of zero marks the value as not-a-number (NaN). Arithmetic
//! never fails; an undefined result (division by zero, a NaN operand, a
//! result outside the `i64` range) is the canonical NaN `0/0`, which then
//! propagates through every following operation.

use crate::error::RationalError;
use crate::normalize::normalize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Rational number with an `i64` numerator and denominator
///
/// Equality is structural: `Rational::raw(2, 4) != Rational::raw(1, 2)`.
/// Only values produced by the constructors and operations are guaranteed
/// to be normalized.
///
/// The default value is the canonical NaN.
#[wasm_bindgen]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RationalRepr", into = "RationalRepr")]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

/// Serialized form: `{"n": 3, "d": 4}`
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RationalRepr {
    n: i64,
    d: i64,
}

impl Rational {
    pub const NAN: Rational = Rational::raw(0, 0);
    pub const ZERO: Rational = Rational::raw(0, 1);
    pub const ONE: Rational = Rational::raw(1, 1);

    /// Build a value from its parts without normalizing or validating.
    pub const fn raw(numerator: i64, denominator: i64) -> Rational {
        Rational {
            numerator,
            denominator,
        }
    }

    /// Like [`Rational::new`], but panics on invalid input.
    ///
    /// # Panics
    ///
    /// If `denominator` is zero or the reduced value does not fit in `i64`.
    pub fn of(numerator: i64, denominator: i64) -> Rational {
        match Rational::new(numerator, denominator) {
            Ok(r) => r,
            Err(e) => panic!("invalid rational {numerator}/{denominator}: {e}"),
        }
    }

    /// Normalize a widened intermediate result. Anything outside the `i64`
    /// range becomes NaN.
    fn from_wide(numerator: i128, denominator: i128) -> Rational {
        match normalize(numerator, denominator) {
            Some((numerator, denominator)) => Rational::raw(numerator, denominator),
            None => {
                debug!("{numerator}/{denominator} does not fit in i64, result is NaN");
                Rational::NAN
            }
        }
    }

    fn wide(&self) -> (i128, i128) {
        (self.numerator.into(), self.denominator.into())
    }
}

#[wasm_bindgen]
impl Rational {
    /// Create a normalized rational number.
    ///
    /// Fails with [`RationalError::InvalidDenominator`] when `denominator` is
    /// zero, and with [`RationalError::Overflow`] for the few `i64::MIN`
    /// inputs whose reduced form is out of range (e.g. `i64::MIN / -1`).
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, RationalError> {
        if denominator == 0 {
            debug!("rejected {numerator}/0");
            return Err(RationalError::InvalidDenominator);
        }

        match normalize(numerator.into(), denominator.into()) {
            Some((n, d)) => Ok(Rational::raw(n, d)),
            None => Err(RationalError::Overflow {
                numerator,
                denominator,
            }),
        }
    }

    /// Convert an integer. Never NaN.
    #[wasm_bindgen(js_name = fromInt)]
    pub fn from_int(numerator: i64) -> Rational {
        Rational::raw(numerator, 1)
    }

    /// Parse `"n"`, `"n/d"` or `"NaN"`.
    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(s: &str) -> Result<Rational, RationalError> {
        s.parse()
    }

    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: JsValue) -> Result<Rational, JsValue> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self)?)
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// A zero denominator is the only thing that makes a value NaN.
    #[wasm_bindgen(js_name = isNaN)]
    pub fn is_nan(&self) -> bool {
        self.denominator == 0
    }

    /// Sum of `self` and `other`
    pub fn plus(&self, other: &Rational) -> Rational {
        if self.is_nan() || other.is_nan() {
            return Rational::NAN;
        }

        let (ln, ld) = self.wide();
        let (rn, rd) = other.wide();
        match (rn * ld).checked_add(ln * rd) {
            Some(numerator) => Rational::from_wide(numerator, ld * rd),
            None => overflowed("plus"),
        }
    }

    /// Difference of `self` and `other`
    pub fn minus(&self, other: &Rational) -> Rational {
        if self.is_nan() || other.is_nan() {
            return Rational::NAN;
        }

        let (ln, ld) = self.wide();
        let (rn, rd) = other.wide();
        match (ln * rd).checked_sub(rn * ld) {
            Some(numerator) => Rational::from_wide(numerator, ld * rd),
            None => overflowed("minus"),
        }
    }

    /// Product of `self` and `other`
    pub fn times(&self, other: &Rational) -> Rational {
        if self.is_nan() || other.is_nan() {
            return Rational::NAN;
        }

        let (ln, ld) = self.wide();
        let (rn, rd) = other.wide();
        Rational::from_wide(ln * rn, ld * rd)
    }

    /// Quotient of `self` and `other`
    ///
    /// Dividing by a zero-valued operand gives a zero denominator, which
    /// normalizes to NaN.
    #[wasm_bindgen(js_name = divideBy)]
    pub fn divide_by(&self, other: &Rational) -> Rational {
        if self.is_nan() || other.is_nan() {
            return Rational::NAN;
        }

        let (ln, ld) = self.wide();
        let (rn, rd) = other.wide();
        Rational::from_wide(ln * rd, ld * rn)
    }

    pub fn neg(&self) -> Rational {
        if self.is_nan() {
            return Rational::NAN;
        }
        let (n, d) = self.wide();
        Rational::from_wide(-n, d)
    }

    pub fn abs(&self) -> Rational {
        if self.is_nan() {
            return Rational::NAN;
        }
        let (n, d) = self.wide();
        Rational::from_wide(n.abs(), d.abs())
    }

    /// Reciprocal (`1/x`). NaN for zero.
    pub fn recip(&self) -> Rational {
        if self.is_nan() {
            return Rational::NAN;
        }
        let (n, d) = self.wide();
        Rational::from_wide(d, n)
    }

    pub fn equals(&self, other: &Rational) -> bool {
        self == other
    }

    #[wasm_bindgen(js_name = isZero)]
    pub fn is_zero(&self) -> bool {
        !self.is_nan() && self.numerator == 0
    }

    #[wasm_bindgen(js_name = isOne)]
    pub fn is_one(&self) -> bool {
        !self.is_nan() && self.numerator == self.denominator
    }

    #[wasm_bindgen(js_name = isNegative)]
    pub fn is_negative(&self) -> bool {
        !self.is_nan() && self.numerator != 0 && (self.numerator < 0) != (self.denominator < 0)
    }

    #[wasm_bindgen(js_name = isPositive)]
    pub fn is_positive(&self) -> bool {
        !self.is_nan() && self.numerator != 0 && (self.numerator < 0) == (self.denominator < 0)
    }

    #[wasm_bindgen(js_name = isInteger)]
    pub fn is_integer(&self) -> bool {
        !self.is_nan() && self.numerator.wrapping_rem(self.denominator) == 0
    }

    /// Convert to string representation "n/d", "n" if d=1, or "NaN"
    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_repr(&self) -> String {
        self.to_string()
    }
}

fn overflowed(op: &str) -> Rational {
    debug!("{op} overflowed, result is NaN");
    Rational::NAN
}

fn parse_int(text: &str) -> Result<i64, RationalError> {
    let text = text.trim();
    text.parse().map_err(|source| RationalError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Rational, RationalError> {
        let s = s.trim();
        if s == "NaN" {
            return Ok(Rational::NAN);
        }

        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Rational::new(parse_int(numerator)?, parse_int(denominator)?)
            }
            None => Ok(Rational::from_int(parse_int(s)?)),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            f.write_str("NaN")
        } else if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl From<RationalRepr> for Rational {
    fn from(repr: RationalRepr) -> Self {
        Rational::from_wide(repr.n.into(), repr.d.into())
    }
}

impl From<Rational> for RationalRepr {
    fn from(r: Rational) -> Self {
        RationalRepr {
            n: r.numerator,
            d: r.denominator,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_int(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_int(n.into())
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((n, d): (i64, i64)) -> Result<Self, RationalError> {
        Rational::new(n, d)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.plus(&rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self.minus(&rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.times(&rhs)
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        self.divide_by(&rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::neg(&self)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::ZERO, |acc, r| acc.plus(&r))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::ZERO, |acc, r| acc.plus(r))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::ONE, |acc, r| acc.times(&r))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::ONE, |acc, r| acc.times(r))
    }
}

impl num_traits::Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl num_traits::One for Rational {
    fn one() -> Self {
        Rational::ONE
    }
}

impl num_traits::Inv for Rational {
    type Output = Rational;

    fn inv(self) -> Rational {
        self.recip()
    }
}

#[cfg(test)]
impl Arbitrary for Rational {
    fn arbitrary(g: &mut Gen) -> Self {
        Rational::raw(arbitrary_part(g), arbitrary_part(g))
    }
}

/// Mostly small parts so results stay in range, with the occasional zero
/// and full-width value mixed in.
#[cfg(test)]
fn arbitrary_part(g: &mut Gen) -> i64 {
    match u8::arbitrary(g) % 8 {
        0 => 0,
        1 => i64::arbitrary(g),
        _ => i16::arbitrary(g).into(),
    }
}
