use crate::error::WellnessError;

pub const JOURNAL_ENTRY_REQUIRED: &str = "Journal entry required";
pub const MESSAGE_REQUIRED: &str = "Message required";

/// Trim a user-supplied field, rejecting missing or blank input with
/// `missing_message`.
pub fn require_text(
    value: Option<&str>,
    missing_message: &'static str,
) -> Result<String, WellnessError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(WellnessError::EmptyInput(missing_message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = require_text(Some("  hello there \n"), MESSAGE_REQUIRED).unwrap();
        assert_eq!(text, "hello there");
    }

    #[test]
    fn rejects_missing_empty_and_blank() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_text(value, JOURNAL_ENTRY_REQUIRED).unwrap_err();
            assert!(matches!(err, WellnessError::EmptyInput(_)));
            assert_eq!(err.to_string(), "Journal entry required");
        }
    }
}
