use std::fmt::{Display, Formatter, Result as FmtResult};

use gcd::Gcd;

use crate::{
    error::{Error, Result},
    zero::{One, Zero},
};

mod arithmetic;
mod cmp;

pub type Primitive = i64;

/// Wide enough to hold the product of any two [`Primitive`]-s
type DoublePrimitive = i128;

/// An exact rational number, numerator / denominator.
///
/// The value is always kept in a canonical form:
/// - the numerator and the denominator are co-prime,
/// - the denominator is positive,
/// - zero is represented only as 0/1.
///
/// The canonical form makes the derived equality and hashing match the mathematical equality.
/// Every operation returns a new value, hence [`Fraction`] is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: Primitive,
    denominator: Primitive,
}

impl Fraction {
    /// Creates a fraction reduced to its lowest terms.
    ///
    /// Fails with [`Error::ZeroDenominator`] if `denominator` is zero, and with
    /// [`Error::Overflow`] if the sign normalization is not representable, e.g. `i64::MIN / -1`.
    pub fn new(numerator: Primitive, denominator: Primitive) -> Result<Self> {
        Self::precondition_check(numerator, denominator)
            .and_then(|()| Self::reduce(numerator, denominator))
            .inspect(|res| debug_assert!(res.invariant_held()))
    }

    pub const fn from_integer(value: Primitive) -> Self {
        Self::new_unchecked(value, Primitive::ONE)
    }

    pub const fn numerator(&self) -> Primitive {
        self.numerator
    }

    pub const fn denominator(&self) -> Primitive {
        self.denominator
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == Primitive::ZERO
    }

    pub const fn is_integer(&self) -> bool {
        self.denominator == Primitive::ONE
    }

    pub const fn is_negative(&self) -> bool {
        self.numerator < Primitive::ZERO
    }

    pub fn abs(self) -> Result<Self> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(self)
        }
    }

    /// Approximates the fraction with the closest `f64`, hence may lose precision.
    pub fn to_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The caller guarantees that the pair is already in the canonical form.
    const fn new_unchecked(numerator: Primitive, denominator: Primitive) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn precondition_check(numerator: Primitive, denominator: Primitive) -> Result<()> {
        if denominator == Primitive::ZERO {
            Err(Error::zero_denominator(numerator))
        } else {
            Ok(())
        }
    }

    fn reduce(numerator: Primitive, denominator: Primitive) -> Result<Self> {
        debug_assert_ne!(denominator, Primitive::ZERO);

        // the gcd of |i64::MIN| and itself does not fit in i64, so divide in the double width
        let gcd = numerator
            .unsigned_abs()
            .gcd_euclid(denominator.unsigned_abs());
        let gcd = DoublePrimitive::from(gcd);

        let nom = DoublePrimitive::from(numerator) / gcd;
        let denom = DoublePrimitive::from(denominator) / gcd;

        let (nom, denom) = if nom == DoublePrimitive::ZERO {
            (DoublePrimitive::ZERO, DoublePrimitive::ONE)
        } else if denom < DoublePrimitive::ZERO {
            (-nom, -denom)
        } else {
            (nom, denom)
        };

        Primitive::try_from(nom)
            .ok()
            .zip(Primitive::try_from(denom).ok())
            .map(|(nom, denom)| Self::new_unchecked(nom, denom))
            .ok_or_else(|| Error::overflow("/", numerator, denominator))
    }

    fn invariant_held(&self) -> bool {
        self.denominator > Primitive::ZERO
            && self
                .numerator
                .unsigned_abs()
                .gcd_euclid(self.denominator.unsigned_abs())
                == 1
    }
}

impl Zero for Fraction {
    const ZERO: Self = Self::new_unchecked(Primitive::ZERO, Primitive::ONE);
}

impl One for Fraction {
    const ONE: Self = Self::new_unchecked(Primitive::ONE, Primitive::ONE);
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Primitive> for Fraction {
    fn from(value: Primitive) -> Self {
        Self::from_integer(value)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_zero() {
            f.write_str("0")
        } else if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
