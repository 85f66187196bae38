use crate::utils::error::{GtinError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GtinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GtinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The csv reader only accepts a single-byte delimiter.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if value.is_ascii() => Ok(*byte),
        _ => Err(GtinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GtinError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GtinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "gtins.csv").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("input.delimiter", ",").unwrap(), b',');
        assert_eq!(validate_delimiter("input.delimiter", "\t").unwrap(), b'\t');
        assert!(validate_delimiter("input.delimiter", "").is_err());
        assert!(validate_delimiter("input.delimiter", ";;").is_err());
        assert!(validate_delimiter("input.delimiter", "é").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("gtin".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("input.column", &present).unwrap(), "gtin");
        assert!(validate_required_field("input.column", &missing).is_err());
    }
}
