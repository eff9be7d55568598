use crate::{
    error::{Error, Result},
    zero::One,
};

use super::{Fraction, Primitive};

impl Fraction {
    /// b / a + d / c = (b * c + d * a) / (a * c)
    ///
    /// Fractions with equal denominators are summed up directly.
    pub fn checked_add<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Self>,
    {
        let rhs = rhs.into();

        if self.denominator == rhs.denominator {
            add(self.numerator, rhs.numerator)
                .and_then(|numerator| Self::new(numerator, self.denominator))
        } else {
            let lhs_nom = mul(self.numerator, rhs.denominator)?;
            let rhs_nom = mul(rhs.numerator, self.denominator)?;
            let numerator = add(lhs_nom, rhs_nom)?;
            let denominator = mul(self.denominator, rhs.denominator)?;

            Self::new(numerator, denominator)
        }
    }

    pub fn checked_sub<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Self>,
    {
        rhs.into()
            .negate()
            .and_then(|neg_rhs| self.checked_add(neg_rhs))
    }

    /// (a / b) * (c / d) = (a * c) / (b * d)
    pub fn checked_mul<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Self>,
    {
        let rhs = rhs.into();

        mul(self.numerator, rhs.numerator)
            .and_then(|numerator| {
                mul(self.denominator, rhs.denominator).map(|denominator| (numerator, denominator))
            })
            .and_then(|(numerator, denominator)| Self::new(numerator, denominator))
    }

    /// (a / b) / (c / d) = (a / b) * (d / c)
    pub fn checked_div<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Self>,
    {
        let rhs = rhs.into();

        if rhs.is_zero() {
            Err(Error::division_by_zero(self))
        } else {
            rhs.reciprocal().and_then(|inv| self.checked_mul(inv))
        }
    }

    pub fn negate(self) -> Result<Self> {
        self.numerator
            .checked_neg()
            .ok_or_else(|| Error::overflow("*", self.numerator, -1))
            .and_then(|numerator| Self::new(numerator, self.denominator))
    }

    pub fn reciprocal(self) -> Result<Self> {
        if self.is_zero() {
            Err(Error::division_by_zero(Primitive::ONE))
        } else {
            Self::new(self.denominator, self.numerator)
        }
    }
}

fn add(lhs: Primitive, rhs: Primitive) -> Result<Primitive> {
    lhs.checked_add(rhs)
        .ok_or_else(|| Error::overflow("+", lhs, rhs))
}

fn mul(lhs: Primitive, rhs: Primitive) -> Result<Primitive> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| Error::overflow("*", lhs, rhs))
}
