pub use crate::{
    error::{Error, Result},
    fraction::{Fraction, Primitive},
};

pub mod batch;
pub mod error;
mod fraction;
pub mod zero;


#[cfg(test)]
mod laws;
