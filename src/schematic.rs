//! ASCII schematic rendering of a resistor's internal network.
//!
//! Presentation collaborator: walks a [`Resistor`]'s ancestry tree, lays each
//! sub-network out in a 2D character buffer (series concatenates on the
//! midline, parallel stacks branches between vertical rails), then replaces
//! the naive `-` wire segments with box-drawing characters picked from each
//! cell's four-neighbor line pattern.
//!
//! Ancestry flattening keeps these drawings flat: `a + b + c` is one row of
//! three blocks, not a nested pair of pairs.

use std::fmt;

use crate::resistor::{Operation, Resistor};

/// Every character treated as "wire" when connecting line segments.
const LINE_CHARS: &str = "-+|─│┌┐└┘├┤┬┴┼╴╵╶╷";

/// A 2D array of characters with blitting and wire-drawing helpers.
#[derive(Debug, Clone)]
struct Buffer {
    w: usize,
    h: usize,
    cells: Vec<Vec<char>>,
}

impl Buffer {
    fn new(w: usize, h: usize) -> Self {
        Buffer {
            w,
            h,
            cells: vec![vec![' '; w]; h],
        }
    }

    fn from_str(s: &str) -> Self {
        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let w = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let h = lines.len().max(1);
        let mut buf = Buffer::new(w, h);
        for (y, line) in lines.into_iter().enumerate() {
            for (x, c) in line.into_iter().enumerate() {
                buf.cells[y][x] = c;
            }
        }
        buf
    }

    fn mid_x(&self) -> usize {
        self.w / 2
    }

    fn mid_y(&self) -> usize {
        self.h / 2
    }

    /// Copy `other` into `self` with its top-left corner at `(x, y)`.
    /// Cells falling outside `self` are dropped.
    fn blit(&mut self, x: usize, y: usize, other: &Buffer) {
        for (dy, row) in other.cells.iter().enumerate() {
            for (dx, &c) in row.iter().enumerate() {
                if y + dy < self.h && x + dx < self.w {
                    self.cells[y + dy][x + dx] = c;
                }
            }
        }
    }

    fn blit_str(&mut self, x: usize, y: usize, s: &str) {
        self.blit(x, y, &Buffer::from_str(s));
    }

    /// Draw a wire from `(x0, y0)` to `(x1, y1)`, moving across first and
    /// then down. Requires `x0 <= x1` and `y0 <= y1`.
    fn line(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        for x in x0..=x1 {
            self.cells[y0][x] = '-';
        }
        for y in (y0 + 1)..=y1 {
            self.cells[y][x1] = '-';
        }
    }

    /// Is the cell at (possibly out-of-range) `(x, y)` part of a wire?
    /// The left/right edges count as wires so terminals connect outward;
    /// the top/bottom edges do not.
    fn is_line(&self, x: isize, y: isize) -> bool {
        if x < 0 || x >= self.w as isize {
            return true;
        }
        if y < 0 || y >= self.h as isize {
            return false;
        }
        LINE_CHARS.contains(self.cells[y as usize][x as usize])
    }

    /// Replace every naive wire cell with the box-drawing character matching
    /// its neighbors.
    fn connect_lines(&mut self) {
        let mut out = self.cells.clone();
        for y in 0..self.h {
            for x in 0..self.w {
                if !self.is_line(x as isize, y as isize) {
                    continue;
                }
                let (x, y) = (x as isize, y as isize);
                let pattern = (
                    self.is_line(x - 1, y),
                    self.is_line(x + 1, y),
                    self.is_line(x, y - 1),
                    self.is_line(x, y + 1),
                );
                out[y as usize][x as usize] = match pattern {
                    (false, false, false, false) => ' ',
                    // stubs render poorly as terminals; use full lines
                    (true, false, false, false) | (false, true, false, false) => '─',
                    (false, false, true, false) | (false, false, false, true) => '│',
                    (false, false, true, true) => '│',
                    (true, true, false, false) => '─',
                    (false, true, false, true) => '┌',
                    (false, true, true, false) => '└',
                    (true, false, false, true) => '┐',
                    (true, false, true, false) => '┘',
                    (false, true, true, true) => '├',
                    (true, false, true, true) => '┤',
                    (true, true, false, true) => '┬',
                    (true, true, true, false) => '┴',
                    (true, true, true, true) => '┼',
                };
            }
        }
        self.cells = out;
    }

    /// Join `self` and `other` side by side, vertically centered.
    fn concat(&self, other: &Buffer) -> Buffer {
        let mut buf = Buffer::new(self.w + other.w, self.h.max(other.h));
        let y1 = buf.mid_y() - self.mid_y();
        let y2 = buf.mid_y() - other.mid_y();
        buf.blit(0, y1, self);
        buf.blit(self.w, y2, other);
        buf
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows: Vec<String> = self.cells.iter().map(|r| r.iter().collect()).collect();
        write!(f, "{}", rows.join("\n"))
    }
}

/// A rendered schematic of one resistor network.
#[derive(Debug, Clone)]
pub struct Schematic {
    buf: Buffer,
    equivalent: String,
}

impl Schematic {
    pub fn new(resistor: &Resistor) -> Self {
        let mut buf = layout(resistor);
        buf.connect_lines();
        Schematic {
            buf,
            equivalent: resistor.resistance(),
        }
    }

    /// The schematic followed by its simplified equivalent, e.g.
    /// `<drawing> == 52.40Ω`.
    pub fn with_equivalent(&self) -> String {
        let tail = Buffer::from_str(&format!(" == ─({})─", self.equivalent));
        self.buf.concat(&tail).to_string()
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.buf)
    }
}

/// Heights stay odd by induction (primitives are 1 high; parallel stacks
/// n odd heights plus n-1 gap rows), so every block has a true midline.
fn layout(resistor: &Resistor) -> Buffer {
    let Some(ancestry) = resistor.ancestry() else {
        return Buffer::from_str(&format!("-({})-", resistor.resistance()));
    };

    let children: Vec<Buffer> = ancestry
        .operands
        .iter()
        .map(|r| layout(r.as_ref()))
        .collect();
    let n = children.len();

    match ancestry.operation {
        Operation::Series => {
            // blocks left to right on a shared midline:
            //     ┌─(200Ω)─┐
            //   ──┤        ├──(400Ω)──
            //     └─(100Ω)─┘
            let max_h = children.iter().map(|c| c.h).max().unwrap_or(1);
            let tot_w: usize = children.iter().map(|c| c.w).sum();
            let mut buf = Buffer::new(tot_w + (n - 1) + 2, max_h);

            let mid_y = buf.mid_y();
            buf.line(0, mid_y, buf.w - 1, mid_y);

            let mut x = 1;
            for child in &children {
                buf.blit(x, buf.mid_y() - child.mid_y(), child);
                x += child.w + 1;
            }
            buf
        }
        Operation::Parallel => {
            // branches stacked between two vertical rails:
            //   ┌──(200Ω)──┐
            //  ─┤          ├─
            //   └──(100Ω)──┘
            let max_w = children.iter().map(|c| c.w).max().unwrap_or(1);
            let tot_h: usize = children.iter().map(|c| c.h).sum();
            let mut buf = Buffer::new(max_w + 6, tot_h + n - 1);

            let mut y = 0;
            for child in &children {
                let row_mid = child.mid_y() + y;
                buf.line(2, row_mid, buf.w - 3, row_mid);
                let x = buf.mid_x() - child.mid_x();
                buf.blit(x, y, child);
                y += child.h + 1;
            }

            // rails span from the first branch's midline to the last's
            let top_y = children[0].mid_y();
            let bot_y = (buf.h - 1) - children[n - 1].mid_y();
            let (left, right) = (1, buf.w - 2);
            buf.line(left, top_y, left, bot_y);
            buf.line(right, top_y, right, bot_y);

            // terminals
            let mid_y = buf.mid_y();
            buf.blit_str(left - 1, mid_y, "--");
            buf.blit_str(right, mid_y, "--");
            buf
        }
    }
}
