//! Code-unit character classes.
//!
//! A class is a sorted list of disjoint, non-adjacent inclusive ranges over
//! 16-bit code units. Lookup is a binary search over the ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of input. Latin-1 and UTF-16 inputs both fit in 16 bits.
pub type CodeUnit = u16;

/// Largest code unit of a compact (Latin-1) input.
pub const LATIN1_MAX: CodeUnit = 0xFF;

/// Set of code units, stored as normalized inclusive ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<(CodeUnit, CodeUnit)>", into = "Vec<(CodeUnit, CodeUnit)>")]
pub struct CharClass {
    ranges: Vec<(CodeUnit, CodeUnit)>,
}

impl CharClass {
    /// Build a class from arbitrary ranges.
    ///
    /// Ranges are sorted and merged; a range with `lo > hi` is empty.
    pub fn new(ranges: impl IntoIterator<Item = (CodeUnit, CodeUnit)>) -> Self {
        let mut ranges: Vec<_> = ranges.into_iter().filter(|(lo, hi)| lo <= hi).collect();
        ranges.sort_unstable();

        let mut merged: Vec<(CodeUnit, CodeUnit)> = Vec::with_capacity(ranges.len());
        for (lo, hi) in ranges {
            match merged.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        Self { ranges: merged }
    }

    /// The empty class. Never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every code unit.
    pub fn any() -> Self {
        Self {
            ranges: vec![(0, CodeUnit::MAX)],
        }
    }

    pub fn single(c: CodeUnit) -> Self {
        Self {
            ranges: vec![(c, c)],
        }
    }

    pub fn range(lo: CodeUnit, hi: CodeUnit) -> Self {
        Self::new([(lo, hi)])
    }

    /// Class of the given ASCII/BMP characters.
    ///
    /// Characters outside the basic multilingual plane are ignored, since
    /// they cannot be a single code unit.
    pub fn of_chars(chars: &str) -> Self {
        Self::new(
            chars
                .chars()
                .filter_map(|c| CodeUnit::try_from(u32::from(c)).ok())
                .map(|u| (u, u)),
        )
    }

    /// Every code unit not in `self`.
    pub fn complement(&self) -> Self {
        let mut out = Vec::with_capacity(self.ranges.len() + 1);
        let mut next: u32 = 0;
        for &(lo, hi) in &self.ranges {
            if u32::from(lo) > next {
                out.push((next as CodeUnit, lo - 1));
            }
            next = u32::from(hi) + 1;
        }
        if next <= u32::from(CodeUnit::MAX) {
            out.push((next as CodeUnit, CodeUnit::MAX));
        }
        Self { ranges: out }
    }

    pub fn ranges(&self) -> &[(CodeUnit, CodeUnit)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_any(&self) -> bool {
        self.ranges == [(0, CodeUnit::MAX)]
    }

    /// Smallest member, if any.
    pub fn min(&self) -> Option<CodeUnit> {
        self.ranges.first().map(|r| r.0)
    }

    /// Membership test.
    #[inline]
    pub fn matches(&self, c: CodeUnit) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < c {
                    std::cmp::Ordering::Less
                } else if lo > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Membership test with the compact-input hint.
    ///
    /// A compact input only holds units up to [`LATIN1_MAX`], so classes
    /// living entirely above it are rejected without searching.
    #[inline]
    pub fn matches_hinted(&self, c: CodeUnit, compact: bool) -> bool {
        if compact && self.min().is_none_or(|m| m > LATIN1_MAX) {
            return false;
        }
        self.matches(c)
    }
}

impl From<Vec<(CodeUnit, CodeUnit)>> for CharClass {
    fn from(ranges: Vec<(CodeUnit, CodeUnit)>) -> Self {
        Self::new(ranges)
    }
}

impl From<CharClass> for Vec<(CodeUnit, CodeUnit)> {
    fn from(class: CharClass) -> Self {
        class.ranges
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("ANY");
        }
        if let [(lo, hi)] = self.ranges.as_slice()
            && lo == hi
        {
            return write!(f, "'{}'", fmt_code_unit(*lo));
        }
        f.write_str("[")?;
        for &(lo, hi) in &self.ranges {
            if lo == hi {
                write!(f, "{}", fmt_code_unit(lo))?;
            } else {
                write!(f, "{}-{}", fmt_code_unit(lo), fmt_code_unit(hi))?;
            }
        }
        f.write_str("]")
    }
}

/// Render a code unit for dumps and traces.
///
/// Printable ASCII is shown as itself; everything else as an escape.
pub fn fmt_code_unit(c: CodeUnit) -> String {
    match c {
        0x21..=0x7E if !matches!(c, 0x27 | 0x2D | 0x5B | 0x5C | 0x5D) => {
            char::from(c as u8).to_string()
        }
        0x00..=0xFF => format!("\\x{c:02X}"),
        _ => format!("\\u{c:04X}"),
    }
}
