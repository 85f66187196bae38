use crate::core::checksum::is_valid_gtin;
use crate::domain::model::Gtin;
use crate::utils::error::{GtinError, Result};

/// Drops every leading `'0'`. An all-zero string becomes empty.
pub fn strip_leading_zeros(raw: &str) -> &str {
    raw.trim_start_matches('0')
}

/// Validates `raw` and returns its canonical form.
///
/// Leading zeros are stripped before the checksum is checked and are not
/// restored. Nothing else is cleaned up: whitespace or punctuation anywhere
/// in `raw` makes it invalid. The error carries `raw` as given.
pub fn normalize(raw: &str) -> Result<Gtin> {
    let stripped = strip_leading_zeros(raw);
    if !is_valid_gtin(stripped) {
        return Err(GtinError::invalid(raw));
    }
    Ok(Gtin::from_canonical(stripped.to_owned()))
}

/// Text-typed entry point; same behavior as [`normalize`].
pub fn from_text(text: &str) -> Result<Gtin> {
    normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("00036000291452"), "36000291452");
        assert_eq!(strip_leading_zeros("36000291452"), "36000291452");
        assert_eq!(strip_leading_zeros("000"), "");
        assert_eq!(strip_leading_zeros(""), "");
        assert_eq!(strip_leading_zeros("0a0"), "a0");
    }

    #[test]
    fn test_normalize_strips_and_keeps_unpadded() {
        let gtin = normalize("00036000291452").unwrap();
        assert_eq!(gtin.as_str(), "36000291452");
    }

    #[test]
    fn test_error_carries_original_input() {
        match normalize("00036000291453") {
            Err(GtinError::InvalidGtin { input }) => assert_eq!(input, "00036000291453"),
            other => panic!("expected InvalidGtin, got {:?}", other),
        }
    }

    #[test]
    fn test_all_zero_input_is_rejected() {
        // "0" alone passes the checksum but strips to an empty string first.
        assert!(normalize("0").is_err());
        assert!(normalize("0000").is_err());
        assert!(normalize("").is_err());
    }

    #[test]
    fn test_no_punctuation_cleanup() {
        assert!(normalize("036000-291452").is_err());
        assert!(normalize(" 036000291452").is_err());
        assert!(normalize("036000291452\n").is_err());
    }

    #[test]
    fn test_from_text_matches_normalize() {
        assert_eq!(
            from_text("0036000291452").unwrap(),
            normalize("36000291452").unwrap()
        );
        assert!(from_text("12a456").is_err());
    }
}
