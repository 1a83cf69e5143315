//! Plain-text snapshot format
//!
//! ```text
//! <body count>
//! <extent>
//! <x> <y> <vx> <vy> <mass> <label>    one line per body
//! ```
//!
//! Decoding only cares about whitespace-separated tokens, so line breaks are
//! not significant. Anything after the last declared body is ignored.
//! Numbers are written in their shortest round-trip form, switching to
//! exponent notation for very large or very small magnitudes.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitAsciiWhitespace};

use super::error::{FormatError, Result};
use super::states::{Body, NVec2, Universe};

/// Encode `universe` as snapshot text
pub fn encode(universe: &Universe) -> String {
    universe.to_string()
}

/// Decode a full snapshot into a fresh universe
pub fn decode(text: &str) -> std::result::Result<Universe, FormatError> {
    let mut tokens = Tokens::new(text);

    let count_tok = tokens.next().ok_or(FormatError::MissingHeader("body count"))?;
    let count: usize = count_tok
        .parse()
        .map_err(|_| FormatError::BadCount(count_tok.to_owned()))?;

    let extent_tok = tokens.next().ok_or(FormatError::MissingHeader("extent"))?;
    let extent = parse_number("extent", extent_tok)?;
    if extent < 0.0 {
        return Err(FormatError::NegativeExtent(extent));
    }

    // count comes from the input, don't trust it for the allocation
    let mut bodies = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        bodies.push(tokens.body(index)?);
    }

    log::debug!("decoded snapshot: {} bodies, extent {}", count, extent);
    Ok(Universe { bodies, extent })
}

impl Universe {
    /// Read a snapshot file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let universe = decode(&text)?;
        log::debug!("loaded {} bodies from {}", universe.len(), path.display());
        Ok(universe)
    }

    /// Write this universe to a snapshot file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, encode(self))?;
        Ok(())
    }
}

impl FromStr for Universe {
    type Err = FormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.bodies.len())?;
        write_number(f, self.extent)?;
        writeln!(f)?;
        for body in &self.bodies {
            writeln!(f, "{}", body)?;
        }
        Ok(())
    }
}

impl FromStr for Body {
    type Err = FormatError;

    /// Parse one `x y vx vy mass label` record; extra tokens are ignored
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Tokens::new(s).body(0)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in [self.x.x, self.x.y, self.v.x, self.v.y, self.m] {
            write_number(f, value)?;
            f.write_str(" ")?;
        }
        f.write_str(&self.label)
    }
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn field(&mut self, index: usize, field: &'static str) -> std::result::Result<&'a str, FormatError> {
        self.next().ok_or(FormatError::Truncated { index, field })
    }

    fn number(&mut self, index: usize, field: &'static str) -> std::result::Result<f64, FormatError> {
        let token = self.field(index, field)?;
        parse_number(field, token)
    }

    /// Body record number `index`, fields in `x y vx vy mass label` order
    fn body(&mut self, index: usize) -> std::result::Result<Body, FormatError> {
        let x = self.number(index, "x")?;
        let y = self.number(index, "y")?;
        let vx = self.number(index, "vx")?;
        let vy = self.number(index, "vy")?;
        let m = self.number(index, "mass")?;
        let label = self.field(index, "label")?;

        Ok(Body::new(NVec2::new(x, y), NVec2::new(vx, vy), m, label))
    }
}

/// A label must survive encoding as exactly one whitespace-separated token
pub fn check_label(label: &str) -> std::result::Result<(), FormatError> {
    if label.is_empty() || label.chars().any(char::is_whitespace) {
        return Err(FormatError::BadLabel(label.to_owned()));
    }
    Ok(())
}

fn parse_number(field: &'static str, token: &str) -> std::result::Result<f64, FormatError> {
    let value: f64 = token.parse().map_err(|_| FormatError::BadNumber {
        field,
        token: token.to_owned(),
    })?;
    if !value.is_finite() {
        return Err(FormatError::NonFinite { field, value });
    }
    Ok(value)
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if value == 0.0 || (1e-5..1e16).contains(&magnitude) {
        write!(f, "{}", value)
    } else {
        write!(f, "{:e}", value)
    }
}
