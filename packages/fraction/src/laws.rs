use std::cmp::Ordering;

use gcd::Gcd;
use proptest::prelude::*;

use crate::{
    batch,
    fraction::Fraction,
    test::strategy::{fraction_in, non_zero_in, small},
    zero::{One, Zero},
};

proptest! {
    #[test]
    fn new_reduced(nom in -1_000_000i64..=1_000_000, denom in -1_000_000i64..=1_000_000) {
        prop_assume!(denom != 0);

        let fraction = Fraction::new(nom, denom).unwrap();
        prop_assert!(fraction.denominator() > 0);
        prop_assert_eq!(
            1,
            fraction.numerator().unsigned_abs().gcd_euclid(fraction.denominator().unsigned_abs())
        );
        prop_assert_eq!(
            i128::from(nom) * i128::from(fraction.denominator()),
            i128::from(denom) * i128::from(fraction.numerator())
        );
    }

    #[test]
    fn new_scaled(nom in -1_000_000i64..=1_000_000, denom in -1_000_000i64..=1_000_000, factor in -1_000i64..=1_000) {
        prop_assume!(denom != 0 && factor != 0);

        prop_assert_eq!(
            Fraction::new(nom, denom),
            Fraction::new(nom * factor, denom * factor)
        );
    }

    #[test]
    fn zero_c16n(denom in any::<i64>()) {
        prop_assume!(denom != 0);

        let zero = Fraction::new(0, denom).unwrap();
        prop_assert_eq!(0, zero.numerator());
        prop_assert_eq!(1, zero.denominator());
    }

    #[test]
    fn identities(x in small()) {
        prop_assert_eq!(Ok(x), x.checked_add(Fraction::ZERO));
        prop_assert_eq!(Ok(x), x.checked_mul(Fraction::ONE));
        prop_assert_eq!(Ok(x), x.checked_sub(0));
        prop_assert_eq!(Ok(x), x.checked_div(1));
    }

    #[test]
    fn inverses(x in small()) {
        prop_assert_eq!(Ok(Fraction::ZERO), x.negate().and_then(|neg| x.checked_add(neg)));
        prop_assert_eq!(Ok(Fraction::ZERO), x.checked_sub(x));
        if !x.is_zero() {
            prop_assert_eq!(Ok(Fraction::ONE), x.reciprocal().and_then(|inv| x.checked_mul(inv)));
            prop_assert_eq!(Ok(Fraction::ONE), x.checked_div(x));
        }
    }

    #[test]
    fn division_by_zero(x in small()) {
        prop_assert!(x.checked_div(Fraction::ZERO).is_err());
    }

    #[test]
    fn add_commutative(x in small(), y in small()) {
        prop_assert_eq!(x.checked_add(y), y.checked_add(x));
        prop_assert_eq!(x.checked_mul(y), y.checked_mul(x));
    }

    #[test]
    fn mul_distributive(x in small(), y in small(), z in small()) {
        let lhs = y.checked_add(z).and_then(|sum| x.checked_mul(sum));
        let rhs = x
            .checked_mul(y)
            .and_then(|xy| x.checked_mul(z).and_then(|xz| xy.checked_add(xz)));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn div_inverts_mul(x in small(), y in non_zero_in(-1_000..=1_000)) {
        prop_assert_eq!(Ok(x), x.checked_mul(y).and_then(|prod| prod.checked_div(y)));
    }

    #[test]
    fn ordering_total(x in fraction_in(-1_000_000..=1_000_000), y in fraction_in(-1_000_000..=1_000_000)) {
        let ord = x.checked_cmp(&y).unwrap();
        prop_assert_eq!(ord.reverse(), y.checked_cmp(&x).unwrap());
        prop_assert_eq!(ord, x.cmp(&y));
        prop_assert_eq!(ord == Ordering::Equal, x == y);
        prop_assert_eq!(ord, x.to_decimal().partial_cmp(&y.to_decimal()).unwrap());
    }

    #[test]
    fn ordering_transitive(x in small(), y in small(), z in small()) {
        let mut sorted = [x, y, z];
        sorted.sort();
        prop_assert!(sorted[0].checked_cmp(&sorted[1]).unwrap().is_le());
        prop_assert!(sorted[1].checked_cmp(&sorted[2]).unwrap().is_le());
        prop_assert!(sorted[0].checked_cmp(&sorted[2]).unwrap().is_le());
    }

    #[test]
    fn max_min_of(fractions in prop::collection::vec(small(), 1..20)) {
        let max = batch::max_of(&fractions).unwrap();
        let min = batch::min_of(&fractions).unwrap();
        prop_assert_eq!(fractions.iter().max().copied(), Some(max));
        prop_assert_eq!(fractions.iter().min().copied(), Some(min));
    }
}
