//! The search engine: which resistances can be built from an inventory?
//!
//! A [`Toolkit`] owns the set of resistances reachable from its primitive
//! inventory, bucketed by exact component count and kept sorted inside each
//! bucket. [`brute_force`](Toolkit::brute_force) grows the set one component
//! count at a time; [`closest`](Toolkit::closest) and
//! [`biggest_gap`](Toolkit::biggest_gap) answer the inverse-design questions:
//! how close can we get to a target, and where is coverage thinnest?
//!
//! The expansion is combinatorial: each extra level multiplies the work by
//! roughly `2 * inventory size`, so insertion and dedup dominate the runtime.
//! Pruning (`prune_tolerance > 0`) trades completeness for a much smaller
//! reachable set.

use std::collections::BTreeMap;
use std::fmt::Write;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::index::OrderedIndex;
use crate::resistor::Resistor;
use crate::RSeries;

/// True if `candidate`'s resistance lies inside the window
/// `[ohms - tol*ohms, ohms + tol*ohms]`. `tol` is a fraction, not a
/// percentage: 0.01 means ±1%.
fn within_tolerance(ohms: f64, tol: f64, candidate: &Resistor) -> bool {
    let delta = ohms * tol;
    let actual = candidate.ohms();
    ohms - delta <= actual && actual <= ohms + delta
}

/// The resistances reachable with up to `max_known_size` primitives from a
/// fixed inventory.
#[derive(Debug, Clone)]
pub struct Toolkit {
    /// component count -> every known resistance with exactly that many
    /// primitives, sorted by ohms. Sparse: only populated counts have keys.
    buckets: BTreeMap<usize, OrderedIndex<Resistor>>,
    /// Buckets up to this count are complete (modulo pruning).
    max_known_size: usize,
}

impl Toolkit {
    /// Build a toolkit whose inventory is one primitive resistor per ohm
    /// value. Duplicate values collapse to a single primitive.
    pub fn new(ohm_values: &[f64]) -> Result<Self> {
        let mut primitives = OrderedIndex::new();
        for &v in ohm_values {
            primitives.insert(Resistor::new(v)?);
        }
        let mut buckets = BTreeMap::new();
        buckets.insert(1, primitives);
        Ok(Toolkit {
            buckets,
            max_known_size: 1,
        })
    }

    /// Build a toolkit stocked with a whole standard series, e.g.
    /// `Toolkit::from_series(&E12)`.
    pub fn from_series(series: &RSeries) -> Result<Self> {
        Self::new(series.values())
    }

    /// Highest component count whose bucket is known to be complete.
    pub fn max_known_size(&self) -> usize {
        self.max_known_size
    }

    /// All known resistors with exactly `count` components, sorted by ohms.
    pub fn bucket(&self, count: usize) -> Option<&OrderedIndex<Resistor>> {
        self.buckets.get(&count)
    }

    /// Total number of distinct resistances known.
    pub fn size(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }

    /// Exact lookup in the bucket matching the resistor's component count.
    pub fn contains(&self, resistor: &Resistor) -> bool {
        self.buckets
            .get(&resistor.component_count())
            .is_some_and(|b| b.contains(resistor))
    }

    /// True if any bucket, of any component count, already holds a resistance
    /// within a `tol * ohms` window around `resistor`. A simpler build
    /// covering the window suppresses more complex ones.
    pub fn fuzzy_contains(&self, resistor: &Resistor, tol: f64) -> bool {
        self.buckets.values().any(|bucket| {
            let above = bucket.find_ge(resistor);
            let below = bucket.find_le(resistor);
            above.is_some_and(|r| within_tolerance(resistor.ohms(), tol, r))
                || below.is_some_and(|r| within_tolerance(resistor.ohms(), tol, r))
        })
    }

    /// Add `resistor` to its component-count bucket, unless it duplicates a
    /// known resistance. With `tol == 0` only an exactly-equal resistance in
    /// the same bucket suppresses it; with `tol > 0` any resistance in any
    /// bucket within the `±tol` window does (pruning). A suppressed insert is
    /// a silent no-op, not an error.
    pub fn insert(&mut self, resistor: Resistor, tol: f64) {
        if tol == 0.0 {
            if self.contains(&resistor) {
                return;
            }
        } else if self.fuzzy_contains(&resistor, tol) {
            return;
        }
        self.buckets
            .entry(resistor.component_count())
            .or_default()
            .insert(resistor);
    }

    /// Expand the toolkit until every composite of up to `k` primitives is
    /// known. Each level pairs every known `i`-component resistor with every
    /// primitive, in both series and parallel. Reads buckets `i` and `1`,
    /// writes only to bucket `i+1`, so a pass never consumes its own output.
    ///
    /// A `k` at or below `max_known_size` is a no-op.
    pub fn brute_force(&mut self, k: usize, prune_tolerance: f64) {
        for i in self.max_known_size..k {
            let composites: Vec<Resistor> =
                match (self.buckets.get(&i), self.buckets.get(&1)) {
                    (Some(level), Some(primitives)) => level
                        .iter()
                        .cartesian_product(primitives.iter())
                        .flat_map(|(r, s)| [r.series(s), r.parallel(s)])
                        .collect(),
                    _ => Vec::new(),
                };
            for c in composites {
                self.insert(c, prune_tolerance);
            }
        }
        self.max_known_size = self.max_known_size.max(k);
    }

    /// Grow by exactly one component count.
    pub fn grow(&mut self, prune_tolerance: f64) {
        self.brute_force(self.max_known_size + 1, prune_tolerance);
    }

    /// The up-to-`k` known resistors closest to `ohms`, drawn from buckets
    /// `1..=n`, excluding anything outside the `±tolerance` window
    /// (a fraction: 0.1 means ±10%). Results are ordered by distance from the
    /// target; at equal distance the resistor above the target wins, so a
    /// build that overshoots beats one that undershoots by the same margin.
    pub fn closest(&self, ohms: f64, k: usize, tolerance: f64, n: usize) -> Result<Vec<Resistor>> {
        let probe = Resistor::new(ohms)?;

        let mut candidates: Vec<Resistor> = Vec::new();
        for i in 1..=n {
            let Some(bucket) = self.buckets.get(&i) else {
                continue;
            };
            let under = bucket.find_le(&probe);
            let mut over = bucket.find_ge(&probe);
            if over == under {
                over = None; // exact hit: same element both ways
            }
            for c in [under, over].into_iter().flatten() {
                if within_tolerance(ohms, tolerance, c) {
                    candidates.push(c.clone());
                }
            }
        }

        candidates.sort_by(|a, b| {
            let da = (ohms - a.ohms()).abs();
            let db = (ohms - b.ohms()).abs();
            da.total_cmp(&db)
                .then_with(|| b.ohms().total_cmp(&a.ohms()))
        });
        candidates.truncate(k);
        Ok(candidates)
    }

    /// The least-covered stretch of resistance among builds of exactly `k`
    /// components: the consecutive pair in bucket `k` with the largest
    /// upper/lower ratio. Returns `(lower, midpoint, upper)` where the
    /// midpoint is a synthetic primitive halfway between the pair. When two
    /// gaps tie on ratio the one higher in the range wins.
    ///
    /// Fails with `NotFound` if bucket `k` is missing or has fewer than two
    /// entries.
    pub fn biggest_gap(&self, k: usize) -> Result<(Resistor, Resistor, Resistor)> {
        let bucket = self
            .buckets
            .get(&k)
            .filter(|b| b.len() >= 2)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "need at least two known resistors with exactly {} components",
                    k
                ))
            })?;

        let mut best: Option<(f64, &Resistor, &Resistor)> = None;
        for (lower, upper) in bucket.iter().tuple_windows() {
            let ratio = upper.ohms() / lower.ohms();
            if best.is_none() || best.as_ref().is_some_and(|(r, _, _)| ratio >= *r) {
                best = Some((ratio, lower, upper));
            }
        }
        let (_, lower, upper) = best.ok_or_else(|| {
            Error::NotFound(format!("no gaps among {}-component resistors", k))
        })?;

        let mid = Resistor::new((lower.ohms() + upper.ohms()) / 2.0)?;
        Ok((lower.clone(), mid, upper.clone()))
    }

    /// Per-bucket summary of everything known, showing at most `limit`
    /// entries per bucket.
    pub fn inventory(&self, limit: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "====== Resistor inventory ======");
        for i in 1..=self.max_known_size {
            let len = self.buckets.get(&i).map_or(0, |b| b.len());
            let _ = writeln!(out, "------ {}x Resistor ({} known) ------", i, len);
            let Some(bucket) = self.buckets.get(&i) else {
                continue;
            };
            for (j, r) in bucket.iter().enumerate() {
                if j >= limit {
                    let _ = writeln!(out, "...");
                    break;
                }
                let _ = writeln!(out, "{} = {}", r, r.algebraic());
            }
        }
        out
    }
}
