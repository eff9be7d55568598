//! Helpers over slices of fractions.
//!
//! None of them modifies its input, except [`swap`].

use crate::{
    error::{Error, Result},
    fraction::Fraction,
};

/// The greatest fraction, the first one among equals
pub fn max_of(fractions: &[Fraction]) -> Result<Fraction> {
    fold_first(fractions, Fraction::checked_max)
}

/// The least fraction, the first one among equals
pub fn min_of(fractions: &[Fraction]) -> Result<Fraction> {
    fold_first(fractions, Fraction::checked_min)
}

pub fn map_all<MapFn, T>(fractions: &[Fraction], map_fn: MapFn) -> Vec<T>
where
    MapFn: FnMut(Fraction) -> T,
{
    fractions.iter().copied().map(map_fn).collect()
}

/// Stops at the first failure
pub fn try_map_all<MapFn, T>(fractions: &[Fraction], map_fn: MapFn) -> Result<Vec<T>>
where
    MapFn: FnMut(Fraction) -> Result<T>,
{
    fractions.iter().copied().map(map_fn).collect()
}

pub fn copy_of(fractions: &[Fraction]) -> Vec<Fraction> {
    fractions.to_vec()
}

pub fn negate_all(fractions: &[Fraction]) -> Result<Vec<Fraction>> {
    try_map_all(fractions, Fraction::negate)
}

pub fn reciprocal_all(fractions: &[Fraction]) -> Result<Vec<Fraction>> {
    try_map_all(fractions, Fraction::reciprocal)
}

pub fn to_decimal_all(fractions: &[Fraction]) -> Vec<f64> {
    map_all(fractions, |fraction| fraction.to_decimal())
}

/// Panics if `i` or `j` is out of bounds
pub fn swap(fractions: &mut [Fraction], i: usize, j: usize) {
    fractions.swap(i, j)
}

fn fold_first<FoldFn>(fractions: &[Fraction], fold_fn: FoldFn) -> Result<Fraction>
where
    FoldFn: FnMut(Fraction, Fraction) -> Result<Fraction>,
{
    fractions
        .split_first()
        .ok_or_else(Error::empty_input)
        .and_then(|(first, rest)| rest.iter().copied().try_fold(*first, fold_fn))
}
