use std::cmp::Ordering;

use crate::error::{Error, Result};

use super::{DoublePrimitive, Fraction};

impl Fraction {
    /// Compares by cross multiplication, sign(a * d - c * b) for a / b and c / d.
    ///
    /// Fails with [`Error::Overflow`] if any of the products does not fit in the primitive.
    /// Use the [`Ord`] implementation for an infallible comparison.
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering> {
        let lhs = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or_else(|| Error::overflow("*", self.numerator, other.denominator))?;
        let rhs = other
            .numerator
            .checked_mul(self.denominator)
            .ok_or_else(|| Error::overflow("*", other.numerator, self.denominator))?;

        Ok(lhs.cmp(&rhs))
    }

    /// The greater of the two, or `self` if they are equal
    pub fn checked_max(self, other: Self) -> Result<Self> {
        self.checked_cmp(&other)
            .map(|ord| if ord.is_ge() { self } else { other })
    }

    /// The lesser of the two, or `self` if they are equal
    pub fn checked_min(self, other: Self) -> Result<Self> {
        self.checked_cmp(&other)
            .map(|ord| if ord.is_le() { self } else { other })
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            self.numerator.cmp(&other.numerator)
        } else {
            // the product of two primitives always fits in a double primitive
            let lhs = DoublePrimitive::from(self.numerator) * DoublePrimitive::from(other.denominator);
            let rhs = DoublePrimitive::from(other.numerator) * DoublePrimitive::from(self.denominator);
            lhs.cmp(&rhs)
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
