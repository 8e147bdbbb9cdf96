//! A resistor-composition toolkit for inverse design.
//!
//! Given an inventory of primitive resistor values, a [`Toolkit`] enumerates
//! every equivalent resistance buildable by combining them in series and
//! parallel within a bounded component count, and answers the questions that
//! matter at the bench: what is the closest build to a target resistance, and
//! where is coverage thinnest?
//!
//! [`Resistor`] values are immutable; composing two of them yields a new value
//! carrying its full ancestry, so results can be rendered back as algebraic
//! expressions, ASCII schematics or color codes.
//!
//! # Example
//! ```rust
//! use resistor_toolkit::Toolkit;
//!
//! fn main() -> resistor_toolkit::Result<()> {
//!     let mut kit = Toolkit::new(&[2200.0, 4700.0, 10_000.0])?;
//!
//!     // know every build of up to three primitives
//!     kit.brute_force(3, 0.0);
//!
//!     // the closest builds to 3.3KΩ, within ±10%
//!     for r in kit.closest(3300.0, 3, 0.1, 3)? {
//!         println!("{} = {}", r, r.algebraic());
//!     }
//!     Ok(())
//! }
//! ```

use itertools::Itertools;
use lazy_static::lazy_static;

pub mod colors;
pub mod error;
pub mod index;
pub mod resistor;
pub mod schematic;
pub mod toolkit;
pub mod units;

pub use error::{Error, Result};
pub use index::OrderedIndex;
pub use resistor::{Ancestry, Operation, Resistor};
pub use schematic::Schematic;
pub use toolkit::Toolkit;
pub use units::Unit;

/// Decades the standard series span: 1Ω up to 9.1MΩ for E24.
const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A standard series of resistor values, spanning every decade in `POWERS`.
/// Constants are provided for the E3/E6/E12/E24 arrays; a [`Toolkit`] can be
/// seeded straight from one via [`Toolkit::from_series`].
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    fn new(series: &[f64]) -> Self {
        RSeries {
            values: series
                .iter()
                .cartesian_product(POWERS.iter())
                .map(|(val, pow)| val * pow)
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            values: base
                .iter()
                .cloned()
                .chain(
                    add.iter()
                        .cartesian_product(POWERS.iter())
                        .map(|(val, pow)| val * pow),
                )
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_sizes() {
        assert_eq!(E3.len(), 3 * POWERS.len());
        assert_eq!(E6.len(), 6 * POWERS.len());
        assert_eq!(E12.len(), 12 * POWERS.len());
        assert_eq!(E24.len(), 24 * POWERS.len());
    }

    #[test]
    fn e3_spans_decades() {
        assert!(E3.iter().any(|&v| v == 2.2));
        assert!(E3.iter().any(|&v| (v - 4_700_000.0).abs() < 1e-3));
    }
}
