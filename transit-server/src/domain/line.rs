//! Transit lines and their categories.

use std::cmp::Ordering;
use std::fmt;

/// Colour used when the upstream omits one (hex, no leading `#`).
pub const DEFAULT_LINE_COLOR: &str = "333333";

/// Mode label used when the upstream omits the commercial mode name.
pub const DEFAULT_MODE_LABEL: &str = "Transport";

/// Regional-rail line letters requested from the catalog.
pub const RAIL_LINE_CODES: [&str; 13] = [
    "A", "B", "C", "D", "E", "H", "J", "K", "L", "N", "P", "R", "U",
];

/// Broad family a line belongs to.
///
/// Only `Metro` and `Rer` are ever produced by the catalog; `Tram` exists
/// in the model but nothing classifies into it yet, and `Other` lines are
/// filtered out before they reach a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    Metro,
    Rer,
    Tram,
    Other,
}

impl LineCategory {
    /// Classify a line from its code and commercial-mode metadata.
    ///
    /// First match wins:
    /// 1. mode id contains `Metro`, or mode name is `Metro`
    /// 2. mode id contains `RER`, or mode name is `RER`
    /// 3. code is a single letter `A`-`E` (feeds without mode metadata)
    /// 4. anything else is `Other`
    pub fn classify(code: &str, mode_id: &str, mode_name: &str) -> Self {
        if mode_id.contains("Metro") || mode_name == "Metro" {
            LineCategory::Metro
        } else if mode_id.contains("RER") || mode_name == "RER" {
            LineCategory::Rer
        } else if is_rer_letter(code) {
            LineCategory::Rer
        } else {
            LineCategory::Other
        }
    }

    /// Position in listings. Lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            LineCategory::Metro => 0,
            LineCategory::Rer => 1,
            LineCategory::Tram => 2,
            LineCategory::Other => 3,
        }
    }

    /// Whether lines of this category appear in the catalog.
    pub fn is_listed(self) -> bool {
        matches!(self, LineCategory::Metro | LineCategory::Rer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineCategory::Metro => "METRO",
            LineCategory::Rer => "RER",
            LineCategory::Tram => "TRAM",
            LineCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for LineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// TODO: validate against the live catalog; a tram or bus line coded "A"
// would be misfiled as RER by this fallback.
fn is_rer_letter(code: &str) -> bool {
    matches!(code.as_bytes(), [b'A'..=b'E'])
}

/// A transit line as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: String,
    pub code: String,
    /// Hex colour without `#`.
    pub color: String,
    pub name: String,
    /// Display label for the mode (commercial mode name).
    pub mode: String,
    pub category: LineCategory,
}

/// Catalog ordering.
///
/// 1. category rank (`Metro` before `Rer`)
/// 2. `Rer`: lexical by code
/// 3. otherwise: numeric by the leading integer of the code when both
///    codes start with a digit, lexical when either does not.
///
/// Numerically equal codes (`"3"` and `"3B"`) fall back to lexical order,
/// which keeps the ordering total.
pub fn compare_lines(a: &Line, b: &Line) -> Ordering {
    if a.category != b.category {
        return a.category.rank().cmp(&b.category.rank());
    }

    if a.category == LineCategory::Rer {
        return a.code.cmp(&b.code);
    }

    match (leading_integer(&a.code), leading_integer(&b.code)) {
        (Some(x), Some(y)) => compare_integers(x, y).then_with(|| a.code.cmp(&b.code)),
        _ => a.code.cmp(&b.code),
    }
}

/// Sort lines into catalog order. Stable, so equal entries keep input order.
pub fn sort_lines(lines: &mut [Line]) {
    lines.sort_by(compare_lines);
}

/// The leading run of ASCII digits, if any.
fn leading_integer(code: &str) -> Option<&str> {
    let len = code.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then(|| &code[..len])
}

/// Compare two digit strings by value, without parsing (no overflow).
fn compare_integers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
pub(crate) fn test_line(code: &str, category: LineCategory) -> Line {
    Line {
        id: format!("line:{code}"),
        code: code.to_string(),
        color: DEFAULT_LINE_COLOR.to_string(),
        name: String::new(),
        mode: DEFAULT_MODE_LABEL.to_string(),
        category,
    }
}
