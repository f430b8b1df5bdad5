//! Plain-text position file.
//!
//! Line structure:
//! ```text
//! xaxis
//! yaxis
//! <gateway count g>
//! x y                  (g lines)
//! <stations per gateway w>
//! <g * w>
//! x y                  (g * w lines, gateway-major)
//! ```
//! The ns-3 mobility scenario splits each pair on a comma, so the writer can
//! also emit `x,y`. The reader takes either form.

use std::io::{BufRead, Write};

use nalgebra::Vector2;

use crate::error::LayoutError;
use crate::tiling::Layout;

/// Separator between the two coordinates of a point line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Space,
    Comma,
}

impl Delimiter {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Comma => ",",
        }
    }
}

/// Number of lines `write_layout` emits for `g` gateways with `w` stations each.
#[inline]
pub fn line_count(g: usize, w: usize) -> usize {
    3 + g + 2 + g * w
}

/// Serialize `layout`. Numbers use `{:?}` so whole values keep their `.0`.
pub fn write_layout<W: Write>(
    out: &mut W,
    layout: &Layout,
    delimiter: Delimiter,
) -> Result<(), LayoutError> {
    let sep = delimiter.as_str();
    writeln!(out, "{:?}", layout.xaxis)?;
    writeln!(out, "{:?}", layout.yaxis)?;
    writeln!(out, "{}", layout.gateways.len())?;
    for p in &layout.gateways {
        writeln!(out, "{:?}{sep}{:?}", p.x, p.y)?;
    }
    writeln!(out, "{}", layout.stations_per_gateway)?;
    writeln!(out, "{}", layout.stations.len())?;
    for p in &layout.stations {
        writeln!(out, "{:?}{sep}{:?}", p.x, p.y)?;
    }
    out.flush()?;
    Ok(())
}

/// Largest point count reserved before the lines are actually read.
const PREALLOC_CAP: usize = 4096;

struct Lines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn next_line(&mut self, what: &str) -> Result<String, LayoutError> {
        self.line_no += 1;
        match self.inner.next() {
            Some(line) => Ok(line?),
            None => Err(LayoutError::parse(
                self.line_no,
                format!("unexpected end of file, expected {what}"),
            )),
        }
    }

    fn scalar<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, LayoutError> {
        let line = self.next_line(what)?;
        line.trim()
            .parse()
            .map_err(|_| LayoutError::parse(self.line_no, format!("bad {what}: {line:?}")))
    }

    fn points(&mut self, n: usize, what: &str) -> Result<Vec<Vector2<f64>>, LayoutError> {
        // `n` comes from the file; a bogus count must end in a parse error at
        // end of file, not an allocation failure.
        let mut out = Vec::with_capacity(n.min(PREALLOC_CAP));
        for _ in 0..n {
            let line = self.next_line(what)?;
            let p = parse_point(&line)
                .ok_or_else(|| LayoutError::parse(self.line_no, format!("bad {what}: {line:?}")))?;
            out.push(p);
        }
        Ok(out)
    }
}

/// Accepts `x y`, `x,y`, `x, y` and the tuple form `(x, y)`.
fn parse_point(line: &str) -> Option<Vector2<f64>> {
    let mut parts = line
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vector2::new(x, y))
}

/// Parse a position file, checking the declared counts.
pub fn read_layout<R: BufRead>(input: R) -> Result<Layout, LayoutError> {
    let mut lines = Lines {
        inner: input.lines(),
        line_no: 0,
    };
    let xaxis: f64 = lines.scalar("xaxis")?;
    let yaxis: f64 = lines.scalar("yaxis")?;
    let g: usize = lines.scalar("gateway count")?;
    let gateways = lines.points(g, "gateway position")?;
    let w: usize = lines.scalar("stations per gateway")?;
    let total: usize = lines.scalar("station count")?;
    let expected = g.checked_mul(w).ok_or_else(|| {
        LayoutError::parse(lines.line_no, "gateway count × stations per gateway overflows")
    })?;
    if total != expected {
        return Err(LayoutError::parse(
            lines.line_no,
            format!("station count {total} != {g} gateways × {w}"),
        ));
    }
    let stations = lines.points(total, "station position")?;
    Ok(Layout {
        xaxis,
        yaxis,
        stations_per_gateway: w,
        gateways,
        stations,
    })
}
