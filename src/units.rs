//! SI-prefixed magnitude formatting for the quantities the library reports.
//!
//! Presentation only: nothing here feeds back into the composition or search
//! algorithms. `Unit::Ohms.format(4700.0)` gives `"4.70KΩ"`,
//! `Unit::Amps.format(0.05)` gives `"50mA"`.

/// SI prefixes from yotta down to yocto, largest first. Formatting walks this
/// table and takes the first prefix the value exceeds.
const SUFFIXES: &[(&str, f64)] = &[
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("K", 1e3),
    ("", 1e0),
    ("m", 1e-3),
    ("μ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// True if `x` is within `tol` of an integer.
pub fn is_integer(x: f64) -> bool {
    (x - x.round()).abs() < 1e-4
}

/// Order of magnitude of `x`, as an exponent and a power of ten.
///
/// `x` must be finite and strictly positive; `log10` of anything else has no
/// integer floor.
pub fn magnitude(x: f64) -> (i32, f64) {
    debug_assert!(x.is_finite() && x > 0.0, "magnitude of {}", x);
    let e = x.log10().floor() as i32;
    (e, 10f64.powi(e))
}

/// Truncate `x` to `sigfigs` significant figures.
///
/// `x` must be finite and non-negative. Callers formatting signed quantities
/// strip the sign first.
pub fn truncate(x: f64, sigfigs: i32) -> f64 {
    debug_assert!(x.is_finite() && x >= 0.0, "truncate of {}", x);
    if x == 0.0 {
        return 0.0;
    }
    let (exp, mag) = magnitude(x);

    // bring x to [1, 10), shift left, drop the tail, shift back
    let scale = 10f64.powi(sigfigs - 1);
    let mut x = (x / mag * scale).round() / scale * mag;

    // exp+1 of the sigfigs sit left of the decimal point; re-round there to
    // undo float noise from the scaling
    if exp >= 0 {
        let p = 10f64.powi(sigfigs - (exp + 1));
        x = (x * p).round() / p;
    }
    x
}

/// A physical unit the library can format quantities of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Ohms,
    Amps,
    Volts,
    Watts,
    Joules,
    Seconds,
    Meters,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Ohms => "Ω",
            Unit::Amps => "A",
            Unit::Volts => "V",
            Unit::Watts => "W",
            Unit::Joules => "J",
            Unit::Seconds => "s",
            Unit::Meters => "m",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Ohms => "Ohms",
            Unit::Amps => "Amps",
            Unit::Volts => "Volts",
            Unit::Watts => "Watts",
            Unit::Joules => "Joules",
            Unit::Seconds => "Seconds",
            Unit::Meters => "Meters",
        }
    }

    /// Format `x` to three significant figures with an SI prefix.
    pub fn format(&self, x: f64) -> String {
        self.format_sigfigs(x, 3)
    }

    /// Format `x` with an SI prefix.
    ///
    /// Layout, for reasonably sized values:
    ///   * above 999 yotta: scientific notation
    ///   * whole numbers drop the fractional part (`455KW`)
    ///   * three-digit mantissas keep one decimal (`107.0MΩ`)
    ///   * everything else keeps two (`66.67Ω`)
    pub fn format_sigfigs(&self, x: f64, sigfigs: i32) -> String {
        if x == 0.0 {
            return format!("0{}", self.symbol());
        }

        let sign = if x < 0.0 { "-" } else { "" };
        let x = x.abs();

        if x > 999.0 * SUFFIXES[0].1 {
            return format!("{}{:.2e}{}", sign, x, self.symbol());
        }

        for &(suffix, mag) in SUFFIXES {
            if x > mag {
                let num = truncate(x / mag, sigfigs);
                return if is_integer(num) {
                    format!("{}{}{}{}", sign, num.round(), suffix, self.symbol())
                } else if num >= 100.0 {
                    format!("{}{:.1}{}{}", sign, num, suffix, self.symbol())
                } else {
                    format!("{}{:.2}{}{}", sign, num, suffix, self.symbol())
                };
            }
        }

        // smaller than a yocto-anything
        format!("{}{:.2e}{}", sign, x, self.symbol())
    }
}
