use crate::error::{DashboardError, DashboardResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> DashboardResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(DashboardError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("hello", "name").unwrap(), "hello");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  key  ", "api_key").unwrap(), "key");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        let err = non_blank("   ", "api_key").unwrap_err();
        assert_eq!(err.to_string(), "api_key cannot be blank");
    }
}
