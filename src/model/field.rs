use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid hardcoded regex")
});

static INFINITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)Infinity$").expect("valid hardcoded regex"));

static RADIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX](?<hex>[0-9a-fA-F]+)|[oO](?<oct>[0-7]+)|[bB](?<bin>[01]+))$")
        .expect("valid hardcoded regex")
});

/// A single form value after coercion: either a number or the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Numeric(f64),
    Text(String),
}

impl FieldValue {
    /// Returns the number if this value was coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this value stayed a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

/// Coerces a raw form value.
///
/// The empty string is never coerced. Anything else that reads as a number
/// (see [`parse_number`]) becomes [`FieldValue::Numeric`]; the rest stays text.
pub fn parse_field(raw: &str) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Text(String::new());
    }
    match parse_number(raw) {
        Some(n) => FieldValue::Numeric(n),
        None => FieldValue::Text(raw.to_string()),
    }
}

/// Reads a string as a number the way a browser's `Number(...)` conversion does.
///
/// Leading and trailing whitespace is ignored and a blank string reads as `0`.
/// Accepts signed decimals with optional fraction and exponent, signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Returns `None` for
/// anything else (`NaN`, `inf`, `1_000`, `12abc`).
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if DECIMAL_RE.is_match(trimmed) {
        return trimmed.parse::<f64>().ok();
    }
    if let Some(caps) = INFINITY_RE.captures(trimmed) {
        return Some(if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let caps = RADIX_RE.captures(trimmed)?;
    let (digits, radix) = if let Some(m) = caps.name("hex") {
        (m.as_str(), 16)
    } else if let Some(m) = caps.name("oct") {
        (m.as_str(), 8)
    } else {
        (caps.name("bin")?.as_str(), 2)
    };
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Whitespace as trimmed by number conversion: Unicode white space plus BOM,
/// minus NEL.
fn is_number_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(n) if !n.is_finite() => serializer.serialize_none(),
            // Integral values go out as JSON integers: "3" is sent as 3, not 3.0.
            Self::Numeric(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Numeric(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[mutants::skip]
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
