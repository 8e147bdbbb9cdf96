//! The immutable composite-resistor value.
//!
//! A [`Resistor`] is either a primitive (one physical part, built straight
//! from an ohm value) or a composite produced by [`series`](Resistor::series)
//! / [`parallel`](Resistor::parallel) combination. Every composition returns
//! a fresh value; nothing is ever mutated in place. Composites carry an
//! [`Ancestry`] record of how they were built, so renderers can reconstruct
//! the network.
//!
//! WARNING: tolerance propagation is a naive approximation. A composite's
//! tolerance is the `max` of its inputs' tolerances, which is not what the
//! statistics of real parts would give you.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, BitOr};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::units::Unit;

/// How a composite's operands were combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Resistances add.
    Series,
    /// Reciprocal resistances add.
    Parallel,
}

/// Provenance of a composite resistor: the operation plus the ordered list of
/// operands it combined. Operands are shared via `Rc`, so the same sub-network
/// can appear in many composites without deep copies. A composition can only
/// reference values that already exist, so the structure is acyclic.
#[derive(Debug, Clone)]
pub struct Ancestry {
    pub operation: Operation,
    pub operands: Vec<Rc<Resistor>>,
}

/// A network of primitive resistors, reduced to its equivalent resistance.
#[derive(Debug, Clone)]
pub struct Resistor {
    ohms: f64,
    tolerance: f64,
    count: usize,
    depth: usize,
    breadth: usize,
    ancestry: Option<Ancestry>,
}

impl Resistor {
    /// A primitive resistor with the default 1% tolerance.
    pub fn new(ohms: f64) -> Result<Self> {
        Self::with_tolerance(ohms, 1.0)
    }

    /// A primitive resistor with an explicit tolerance, in percentage points
    /// (1.0 == 1%).
    pub fn with_tolerance(ohms: f64, tolerance: f64) -> Result<Self> {
        if !ohms.is_finite() || ohms < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "ohms must be finite and non-negative (got {})",
                ohms
            )));
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "tolerance must be finite and non-negative (got {})",
                tolerance
            )));
        }
        Ok(Resistor {
            ohms,
            tolerance,
            count: 1,
            depth: 1,
            breadth: 1,
            ancestry: None,
        })
    }

    /// Equivalent resistance in ohms.
    pub fn ohms(&self) -> f64 {
        self.ohms
    }

    /// Tolerance in percentage points.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of primitive resistors in the network.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Number of resistors on the longest primitive-to-terminal path.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Width of the widest parallel section.
    pub fn breadth(&self) -> usize {
        self.breadth
    }

    pub fn is_primitive(&self) -> bool {
        self.count == 1
    }

    /// How this resistor was composed, or `None` for primitives.
    pub fn ancestry(&self) -> Option<&Ancestry> {
        self.ancestry.as_ref()
    }

    /// If `self` was already built by `op`, reuse its flattened operand list;
    /// otherwise it enters the new record whole. Keeps chains like
    /// `a + b + c` a single three-operand record instead of a left-leaning
    /// tree.
    fn operands_under(&self, op: Operation) -> Vec<Rc<Resistor>> {
        match &self.ancestry {
            Some(a) if a.operation == op => a.operands.clone(),
            _ => vec![Rc::new(self.clone())],
        }
    }

    fn compose(&self, other: &Resistor, op: Operation) -> Resistor {
        let ohms = match op {
            Operation::Series => self.ohms + other.ohms,
            Operation::Parallel => {
                if self.ohms == 0.0 || other.ohms == 0.0 {
                    0.0
                } else {
                    1.0 / (1.0 / self.ohms + 1.0 / other.ohms)
                }
            }
        };
        let (depth, breadth) = match op {
            Operation::Series => (self.depth + other.depth, self.breadth.max(other.breadth)),
            Operation::Parallel => (self.depth.max(other.depth), self.breadth + other.breadth),
        };
        let mut operands = self.operands_under(op);
        operands.extend(other.operands_under(op));
        Resistor {
            ohms,
            tolerance: self.tolerance.max(other.tolerance),
            count: self.count + other.count,
            depth,
            breadth,
            ancestry: Some(Ancestry {
                operation: op,
                operands,
            }),
        }
    }

    /// Place `self` in series with `other`. Also available as `+`.
    pub fn series(&self, other: &Resistor) -> Resistor {
        self.compose(other, Operation::Series)
    }

    /// Place `self` in parallel with `other`. Also available as `|`.
    pub fn parallel(&self, other: &Resistor) -> Resistor {
        self.compose(other, Operation::Parallel)
    }

    /// `n` copies of `self` in series.
    pub fn times(&self, n: usize) -> Result<Resistor> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "repetition count must be positive".into(),
            ));
        }
        let mut r = self.clone();
        for _ in 1..n {
            r = r.series(self);
        }
        Ok(r)
    }

    /// `n` copies of `self` in parallel.
    pub fn parallel_times(&self, n: usize) -> Result<Resistor> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "repetition count must be positive".into(),
            ));
        }
        let mut r = self.clone();
        for _ in 1..n {
            r = r.parallel(self);
        }
        Ok(r)
    }

    /// Lower edge of the tolerance window.
    pub fn min_ohms(&self) -> f64 {
        self.ohms * (1.0 - self.tolerance / 100.0)
    }

    /// Upper edge of the tolerance window.
    pub fn max_ohms(&self) -> f64 {
        self.ohms * (1.0 + self.tolerance / 100.0)
    }

    /// Full width of the tolerance window.
    pub fn ohms_range(&self) -> f64 {
        self.max_ohms() - self.min_ohms()
    }

    /// Current drawn at `volts`, in amps. Undefined across a zero-ohm
    /// resistor.
    pub fn current(&self, volts: f64) -> Result<f64> {
        if self.ohms == 0.0 {
            return Err(Error::DivisionByZero(
                "current through a zero-ohm resistor is undefined".into(),
            ));
        }
        Ok(volts / self.ohms)
    }

    /// Voltage dropped at `amps`, in volts.
    pub fn voltage(&self, amps: f64) -> f64 {
        amps * self.ohms
    }

    /// Power dissipated at `volts`, in watts.
    pub fn power(&self, volts: f64) -> Result<f64> {
        if self.ohms == 0.0 {
            return Err(Error::DivisionByZero(
                "power across a zero-ohm resistor is undefined".into(),
            ));
        }
        Ok(volts * volts / self.ohms)
    }

    /// Power dissipated carrying `amps`, in watts.
    pub fn power_from_current(&self, amps: f64) -> f64 {
        amps * amps * self.ohms
    }

    /// Energy dissipated holding `volts` for `seconds`, in joules.
    pub fn energy(&self, volts: f64, seconds: f64) -> Result<f64> {
        Ok(self.power(volts)? * seconds)
    }

    /// Length of uniform wire with this resistance, given the material's
    /// resistivity (ohm-meters) and the wire's cross-section (square meters).
    pub fn wire_length(&self, resistivity: f64, cross_section: f64) -> Result<f64> {
        if resistivity == 0.0 {
            return Err(Error::DivisionByZero(
                "wire length is undefined for zero resistivity".into(),
            ));
        }
        Ok(self.ohms * cross_section / resistivity)
    }

    /// Human-readable equivalent resistance, e.g. `4.70KΩ`.
    pub fn resistance(&self) -> String {
        Unit::Ohms.format(self.ohms)
    }

    /// Render the ancestry as an algebraic expression, e.g.
    /// `(100Ω + 200Ω) | 50Ω`. Primitives render as their resistance.
    pub fn algebraic(&self) -> String {
        match &self.ancestry {
            None => self.resistance(),
            Some(a) => {
                let sep = match a.operation {
                    Operation::Series => " + ",
                    Operation::Parallel => " | ",
                };
                a.operands
                    .iter()
                    .map(|r| {
                        if r.is_primitive() {
                            r.algebraic()
                        } else {
                            format!("({})", r.algebraic())
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(sep)
            }
        }
    }
}

// Equality, ordering and hashing are all defined purely by `ohms`: two
// differently-structured networks with the same equivalent resistance compare
// equal and hash equal. The Toolkit's dedup depends on this, so hash
// uniqueness must never be taken to imply structural identity.
// `ohms` is always finite and non-negative, so `total_cmp` is a true total
// order and `to_bits` is a consistent hash key.

impl PartialEq for Resistor {
    fn eq(&self, other: &Self) -> bool {
        self.ohms == other.ohms
    }
}

impl Eq for Resistor {}

impl PartialOrd for Resistor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resistor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ohms.total_cmp(&other.ohms)
    }
}

impl Hash for Resistor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ohms.to_bits().hash(state);
    }
}

impl Add for &Resistor {
    type Output = Resistor;

    fn add(self, other: &Resistor) -> Resistor {
        self.series(other)
    }
}

impl BitOr for &Resistor {
    type Output = Resistor;

    fn bitor(self, other: &Resistor) -> Resistor {
        self.parallel(other)
    }
}

impl Add for Resistor {
    type Output = Resistor;

    fn add(self, other: Resistor) -> Resistor {
        self.series(&other)
    }
}

impl BitOr for Resistor {
    type Output = Resistor;

    fn bitor(self, other: Resistor) -> Resistor {
        self.parallel(&other)
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{} ±{}%>", self.resistance(), self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn r(ohms: f64) -> Resistor {
        Resistor::new(ohms).unwrap()
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Resistor::new(-1.0).is_err());
        assert!(Resistor::new(f64::NAN).is_err());
        assert!(Resistor::with_tolerance(100.0, -0.5).is_err());
        assert!(r(100.0).times(0).is_err());
        assert!(r(100.0).parallel_times(0).is_err());
    }

    #[test]
    fn series_adds_resistances() {
        assert_eq!(r(100.0).series(&r(200.0)).ohms(), 300.0);
        assert_eq!((&r(470.0) + &r(220.0)).ohms(), 690.0);
    }

    #[test]
    fn parallel_is_harmonic() {
        let p = r(100.0).parallel(&r(100.0));
        assert_eq!(p.ohms(), 50.0);
        let q = &r(100.0) | &r(200.0);
        assert!((q.ohms() - 200.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_with_zero_is_zero() {
        assert_eq!(r(0.0).parallel(&r(100.0)).ohms(), 0.0);
        assert_eq!(r(100.0).parallel(&r(0.0)).ohms(), 0.0);
    }

    #[test]
    fn count_is_additive() {
        let a = r(10.0).series(&r(20.0));
        let b = a.parallel(&r(30.0));
        assert_eq!(a.component_count(), 2);
        assert_eq!(b.component_count(), 3);
    }

    #[test]
    fn depth_and_breadth() {
        let chain = r(10.0).series(&r(10.0)).series(&r(10.0));
        assert_eq!(chain.depth(), 3);
        assert_eq!(chain.breadth(), 1);

        let ladder = r(10.0).parallel(&r(10.0)).parallel(&r(10.0));
        assert_eq!(ladder.depth(), 1);
        assert_eq!(ladder.breadth(), 3);

        // two 2-chains side by side
        let grid = chain.parallel(&chain);
        assert_eq!(grid.depth(), 3);
        assert_eq!(grid.breadth(), 2);
    }

    #[test]
    fn tolerance_combines_by_max() {
        let a = Resistor::with_tolerance(100.0, 5.0).unwrap();
        let b = Resistor::with_tolerance(100.0, 1.0).unwrap();
        assert_eq!(a.series(&b).tolerance(), 5.0);
        assert_eq!(b.parallel(&a).tolerance(), 5.0);
    }

    #[test]
    fn same_operation_flattens() {
        let chain = r(10.0).series(&r(20.0)).series(&r(30.0));
        let a = chain.ancestry().unwrap();
        assert_eq!(a.operation, Operation::Series);
        assert_eq!(a.operands.len(), 3);

        // switching operations starts a fresh record
        let mixed = chain.parallel(&r(40.0));
        let a = mixed.ancestry().unwrap();
        assert_eq!(a.operation, Operation::Parallel);
        assert_eq!(a.operands.len(), 2);

        // merging two parallel composites flattens both sides
        let ladder = r(1.0).parallel(&r(2.0)).parallel(&(r(3.0).parallel(&r(4.0))));
        assert_eq!(ladder.ancestry().unwrap().operands.len(), 4);
    }

    #[test]
    fn primitives_have_no_ancestry() {
        assert!(r(100.0).ancestry().is_none());
        assert!(r(100.0).is_primitive());
        assert!(!r(100.0).series(&r(100.0)).is_primitive());
    }

    #[test]
    fn times_repeats_series() {
        let t = r(10.0).times(3).unwrap();
        assert_eq!(t.ohms(), 30.0);
        assert_eq!(t.component_count(), 3);
        assert_eq!(t.ancestry().unwrap().operands.len(), 3);

        let p = r(10.0).parallel_times(2).unwrap();
        assert_eq!(p.ohms(), 5.0);

        assert_eq!(r(10.0).times(1).unwrap().ohms(), 10.0);
    }

    #[test]
    fn ordering_and_equality_are_by_ohms() {
        let series = r(10.0).series(&r(20.0)); // 30, two parts
        let single = r(30.0); // one part
        assert_eq!(series, single);
        assert!(r(10.0) < r(20.0));
        assert!(series <= single);
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        fn hash_of(r: &Resistor) -> u64 {
            let mut h = DefaultHasher::new();
            r.hash(&mut h);
            h.finish()
        }
        let series = r(12.0).series(&r(18.0));
        let single = r(30.0);
        assert_eq!(hash_of(&series), hash_of(&single));
    }

    #[test]
    fn tolerance_window() {
        let a = Resistor::with_tolerance(100.0, 5.0).unwrap();
        assert_eq!(a.min_ohms(), 95.0);
        assert_eq!(a.max_ohms(), 105.0);
        assert_eq!(a.ohms_range(), 10.0);
    }

    #[test]
    fn electrical_helpers() {
        let a = r(100.0);
        assert_eq!(a.current(5.0).unwrap(), 0.05);
        assert_eq!(a.voltage(0.05), 5.0);
        assert_eq!(a.power(10.0).unwrap(), 1.0);
        assert_eq!(a.power_from_current(0.1), 1.0);
        assert_eq!(a.energy(10.0, 60.0).unwrap(), 60.0);

        let zero = r(0.0);
        assert!(matches!(zero.current(5.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(zero.power(5.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(zero.energy(5.0, 1.0), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn wire_length_of_copper() {
        // 1mm^2 copper wire, rho = 1.68e-8 ohm-m
        let a = r(1.0);
        let len = a.wire_length(1.68e-8, 1e-6).unwrap();
        assert!((len - 59.52).abs() < 0.01);
        assert!(a.wire_length(0.0, 1e-6).is_err());
    }

    #[test]
    fn algebraic_rendering() {
        let a = r(100.0).series(&r(200.0));
        assert_eq!(a.algebraic(), "100Ω + 200Ω");
        let b = a.parallel(&r(50.0));
        assert_eq!(b.algebraic(), "(100Ω + 200Ω) | 50Ω");
    }
}
