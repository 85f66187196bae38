use crate::core::normalizer;
use crate::utils::error::{GtinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest canonical GTIN the host column type was sized for.
///
/// Validation does not enforce it; hosts with fixed-width storage check
/// [`Gtin::fits_storage`] before persisting a value.
pub const MAX_GTIN_LEN: usize = 18;

/// A validated GTIN in canonical form.
///
/// # Invariants
/// - Non-empty, ASCII digits only, no leading `'0'`.
/// - The weighted mod-10 checksum of the digits is zero.
/// - Owns its buffer; never aliases the text it was parsed from.
///
/// Values are only built by [`normalizer::normalize`]; every conversion below
/// routes through it. Ordering is byte-wise on the canonical text, see
/// [`crate::core::comparator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gtin(String);

impl Gtin {
    /// Only the normalizer calls this, after validation.
    pub(crate) fn from_canonical(canonical: String) -> Self {
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of significant digits (the check digit included).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes().last().map(|b| b - b'0').unwrap_or(0)
    }

    /// Host-facing helper: `false` when the value is longer than [`MAX_GTIN_LEN`].
    pub fn fits_storage(&self) -> bool {
        self.len() <= MAX_GTIN_LEN
    }

    /// Zero-pads the canonical digits to a standard width.
    ///
    /// Returns `None` when the value has more significant digits than `width`.
    pub fn to_padded(&self, width: GtinWidth) -> Option<String> {
        let digits = width.digits();
        if self.len() > digits {
            return None;
        }
        Some(format!("{:0>width$}", self.0, width = digits))
    }

    /// Smallest standard width the value can be written in.
    pub fn narrowest_width(&self) -> Option<GtinWidth> {
        GtinWidth::ALL
            .iter()
            .copied()
            .find(|width| self.len() <= width.digits())
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self> {
        normalizer::normalize(s)
    }
}

impl TryFrom<&str> for Gtin {
    type Error = GtinError;

    fn try_from(value: &str) -> Result<Self> {
        normalizer::normalize(value)
    }
}

impl TryFrom<String> for Gtin {
    type Error = GtinError;

    fn try_from(value: String) -> Result<Self> {
        normalizer::normalize(&value)
    }
}

impl TryFrom<u64> for Gtin {
    type Error = GtinError;

    fn try_from(value: u64) -> Result<Self> {
        normalizer::normalize(&value.to_string())
    }
}

impl From<Gtin> for String {
    fn from(value: Gtin) -> Self {
        value.0
    }
}

/// Standard GTIN widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum GtinWidth {
    Gtin8,
    Gtin12,
    Gtin13,
    Gtin14,
}

impl GtinWidth {
    pub const ALL: [GtinWidth; 4] = [
        GtinWidth::Gtin8,
        GtinWidth::Gtin12,
        GtinWidth::Gtin13,
        GtinWidth::Gtin14,
    ];

    pub fn digits(self) -> usize {
        match self {
            GtinWidth::Gtin8 => 8,
            GtinWidth::Gtin12 => 12,
            GtinWidth::Gtin13 => 13,
            GtinWidth::Gtin14 => 14,
        }
    }
}

impl fmt::Display for GtinWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GTIN-{}", self.digits())
    }
}
