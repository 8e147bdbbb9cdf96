//! Resistor color-code bands.
//!
//! Presentation collaborator: maps a [`Resistor`]'s resistance and tolerance
//! onto the standard band colors, and renders small band diagrams. Styles are
//! an enum dispatched by `match`; the color table is a fixed constant.

use crate::error::{Error, Result};
use crate::resistor::Resistor;
use crate::units::{magnitude, truncate};

const ANSI_RESET: &str = "\x1b[0m";

/// The twelve colors of the resistor code, in digit order (black = 0 through
/// white = 9, then gold and silver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

use self::ColorBand::*;

/// Digit order, also the order of the magnitude colors.
pub const COLORS: [ColorBand; 12] = [
    Black, Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey, White, Gold, Silver,
];

impl ColorBand {
    pub fn name(&self) -> &'static str {
        match self {
            Black => "black",
            Brown => "brown",
            Red => "red",
            Orange => "orange",
            Yellow => "yellow",
            Green => "green",
            Blue => "blue",
            Violet => "violet",
            Grey => "grey",
            White => "white",
            Gold => "gold",
            Silver => "silver",
        }
    }

    /// One-letter mnemonic. Black is `k` and grey `e` to stay unambiguous.
    pub fn letter(&self) -> char {
        match self {
            Black => 'k',
            Brown => 'n',
            Red => 'r',
            Orange => 'o',
            Yellow => 'y',
            Green => 'g',
            Blue => 'b',
            Violet => 'v',
            Grey => 'e',
            White => 'w',
            Gold => 'u',
            Silver => 's',
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Black => "blk",
            Brown => "bwn",
            Red => "red",
            Orange => "orn",
            Yellow => "ylw",
            Green => "grn",
            Blue => "blu",
            Violet => "vio",
            Grey => "gry",
            White => "whi",
            Gold => "gld",
            Silver => "slv",
        }
    }

    /// 24-bit display color. The true band pigments don't all have obvious
    /// terminal equivalents; these are tuned for dark backgrounds.
    pub fn rgb(&self) -> u32 {
        match self {
            Black => 0x000000,
            Brown => 0x663232,
            Red => 0xff0000,
            Orange => 0xff6600,
            Yellow => 0xffff00,
            Green => 0x34cd32,
            Blue => 0x6666ff,
            Violet => 0xcd66ff,
            Grey => 0x939393,
            White => 0xffffff,
            Gold => 0xcd9932,
            Silver => 0xcac9c9,
        }
    }

    /// ANSI 24-bit foreground escape for this color.
    pub fn ansi(&self) -> String {
        let rgb = self.rgb();
        format!(
            "\x1b[38;2;{};{};{}m",
            (rgb >> 16) & 0xff,
            (rgb >> 8) & 0xff,
            rgb & 0xff
        )
    }

    /// Band color for a significant digit 0..=9.
    pub fn from_digit(d: u32) -> Result<Self> {
        COLORS
            .get(d as usize)
            .filter(|_| d <= 9)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!("no color band for digit {}", d)))
    }

    /// Band color for a multiplier of `10^e`. Defined for -2..=9.
    pub fn from_magnitude(e: i32) -> Result<Self> {
        match e {
            -2 => Ok(Silver),
            -1 => Ok(Gold),
            0..=9 => Ok(COLORS[e as usize]),
            _ => Err(Error::InvalidArgument(format!(
                "resistance magnitudes outside [10^-2, 10^9] have no color code (10^{})",
                e
            ))),
        }
    }

    /// Band color for a tolerance in percentage points.
    pub fn from_tolerance(tol: f64) -> Result<Self> {
        const TABLE: [(f64, ColorBand); 8] = [
            (1.0, Brown),
            (2.0, Red),
            (0.5, Green),
            (0.25, Blue),
            (0.10, Violet),
            (0.05, Grey),
            (5.0, Gold),
            (10.0, Silver),
        ];
        TABLE
            .iter()
            .find(|(t, _)| (t - tol).abs() < 1e-9)
            .map(|(_, c)| *c)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("tolerance of {}% has no color code", tol))
            })
    }
}

/// The band colors encoding a resistor's value.
///
/// Supports 3-band (two digits + multiplier), 4-band (plus tolerance) and
/// 5-band (three digits + multiplier + tolerance) codes. 6-band codes carry a
/// temperature coefficient the core does not track, so they are rejected,
/// as is any other band count. A zero-ohm link is the single black band.
pub fn color_code(resistor: &Resistor, bands: usize) -> Result<Vec<ColorBand>> {
    if !(3..=5).contains(&bands) {
        return Err(Error::InvalidArgument(format!(
            "color codes are supported for 3, 4 or 5 bands (got {})",
            bands
        )));
    }

    let ohms = resistor.ohms();
    if ohms == 0.0 {
        return Ok(vec![Black]);
    }

    let (e, mag) = magnitude(ohms);
    // the three most significant digits, as characters
    let digit_str = format!("{:.2}", truncate(ohms / mag, 3)).replace('.', "");
    let digits: Vec<ColorBand> = digit_str
        .bytes()
        .take(3)
        .map(|b| ColorBand::from_digit((b - b'0') as u32))
        .collect::<Result<_>>()?;

    // how many orders of magnitude the digit bands already account for
    let shift = if bands <= 4 { 1 } else { 2 };
    let multiplier = ColorBand::from_magnitude(e - shift)?;

    let mut code = vec![digits[0], digits[1]];
    if bands >= 5 {
        code.push(digits[2]);
    }
    code.push(multiplier);
    if bands >= 4 {
        code.push(ColorBand::from_tolerance(resistor.tolerance())?);
    }
    Ok(code)
}

/// How a band diagram renders each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandStyle {
    /// One mnemonic letter per band.
    Letters,
    /// Three-letter abbreviations.
    Abbreviations,
    /// ANSI 24-bit colored band glyphs.
    Ansi,
}

/// Draw a small boxed diagram of a band sequence, e.g. for `Letters`:
///
/// ```text
///  ┌───────┐
/// ─┤ yvr  n ├─
///  └───────┘
/// ```
///
/// Digit/multiplier bands sit left, tolerance (and any trailing band) right,
/// with a gap between the groups, like on a physical part.
pub fn band_diagram(bands: &[ColorBand], style: BandStyle) -> Result<String> {
    if !(3..=6).contains(&bands.len()) {
        return Err(Error::InvalidArgument(format!(
            "band diagrams are defined for 3 to 6 bands (got {})",
            bands.len()
        )));
    }

    let (pieces, sep): (Vec<String>, &str) = match style {
        BandStyle::Letters => (bands.iter().map(|c| c.letter().to_string()).collect(), ""),
        BandStyle::Abbreviations => {
            (bands.iter().map(|c| c.abbrev().to_string()).collect(), " ")
        }
        BandStyle::Ansi => (
            bands
                .iter()
                .map(|c| format!("{}▌{}", c.ansi(), ANSI_RESET))
                .collect(),
            "",
        ),
    };

    // value bands on the left, tolerance/extra bands on the right
    let left_len = if bands.len() <= 4 { 3 } else { 4 };
    let gap = " ".repeat(7 - bands.len());
    let left = pieces[..left_len.min(pieces.len())].join(sep);
    let right = pieces[left_len.min(pieces.len())..].join(sep);
    let body = format!("{}{}{}", left, gap, right);

    // display width of the body; ANSI escapes render zero-wide
    let width = match style {
        BandStyle::Ansi => bands.len() + gap.len(),
        _ => body.chars().count(),
    };

    let rail = "─".repeat(width + 2);
    Ok(format!(
        " ┌{rail}┐ \n─┤ {body} ├─\n └{rail}┘ ",
        rail = rail,
        body = body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(ohms: f64) -> Resistor {
        Resistor::new(ohms).unwrap()
    }

    #[test]
    fn four_band_code_of_4k7() {
        let code = color_code(&r(4700.0), 4).unwrap();
        assert_eq!(code, vec![Yellow, Violet, Red, Brown]);
    }

    #[test]
    fn three_and_five_band_codes() {
        assert_eq!(color_code(&r(4700.0), 3).unwrap(), vec![Yellow, Violet, Red]);
        assert_eq!(
            color_code(&r(4700.0), 5).unwrap(),
            vec![Yellow, Violet, Black, Brown, Brown]
        );
    }

    #[test]
    fn sub_ohm_values_use_gold_and_silver_multipliers() {
        assert_eq!(color_code(&r(0.47), 3).unwrap(), vec![Yellow, Violet, Silver]);
        assert_eq!(color_code(&r(4.7), 3).unwrap(), vec![Yellow, Violet, Gold]);
    }

    #[test]
    fn zero_ohm_link_is_a_single_black_band() {
        assert_eq!(color_code(&r(0.0), 4).unwrap(), vec![Black]);
    }

    #[test]
    fn unsupported_band_counts_are_rejected() {
        assert!(color_code(&r(100.0), 2).is_err());
        assert!(color_code(&r(100.0), 6).is_err());
    }

    #[test]
    fn out_of_range_lookups_are_rejected() {
        assert!(ColorBand::from_digit(10).is_err());
        assert!(ColorBand::from_magnitude(10).is_err());
        assert!(ColorBand::from_magnitude(-3).is_err());
        assert!(ColorBand::from_tolerance(3.0).is_err());
    }

    #[test]
    fn tolerance_lookups() {
        assert_eq!(ColorBand::from_tolerance(1.0).unwrap(), Brown);
        assert_eq!(ColorBand::from_tolerance(5.0).unwrap(), Gold);
        assert_eq!(ColorBand::from_tolerance(0.10).unwrap(), Violet);
    }

    #[test]
    fn letter_diagram_layout() {
        let code = color_code(&r(4700.0), 4).unwrap();
        let diagram = band_diagram(&code, BandStyle::Letters).unwrap();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("yvr   n"));
        // box edges align
        assert_eq!(
            lines[0].chars().count(),
            lines[2].chars().count()
        );
    }

    #[test]
    fn ansi_diagram_colors_each_band() {
        let code = color_code(&r(100.0), 4).unwrap();
        let diagram = band_diagram(&code, BandStyle::Ansi).unwrap();
        assert_eq!(diagram.matches("\x1b[38;2;").count(), 4);
    }
}
