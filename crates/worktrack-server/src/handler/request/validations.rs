//! Shared field validators and deserializers.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Upper bound on password size accepted by the hasher.
pub(crate) const MAX_PASSWORD_BYTES: usize = 128;

/// Deserializes a string with surrounding whitespace removed.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_owned())
}

/// Rejects strings that are empty after trimming.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Rejects passwords the hasher would refuse.
pub(crate) fn password_size(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut error = ValidationError::new("length");
        error.message = Some(format!("must be at most {MAX_PASSWORD_BYTES} bytes").into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("  \t").is_err());
        assert!(not_blank(" a ").is_ok());
    }

    #[test]
    fn password_size_counts_bytes() {
        assert!(password_size(&"a".repeat(128)).is_ok());
        assert!(password_size(&"é".repeat(65)).is_err());
    }
}
