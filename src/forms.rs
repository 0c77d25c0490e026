use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Blank and whitespace-only values count as missing.
pub fn require(label: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(label));
    }
    Ok(())
}

pub fn require_max_len(label: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    require(label, value)?;
    if value.chars().count() > max {
        return Err(FormError::TooLong { field: label, max });
    }
    Ok(())
}

/// Keeps at most `max` characters, for inputs with a `maxlength`.
pub fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whitespace_counts_as_missing() {
        assert_eq!(require("API ID", "   "), Err(FormError::Missing("API ID")));
        assert_eq!(require("API ID", "12345"), Ok(()));
    }

    #[test]
    fn length_limit_is_in_characters() {
        assert_eq!(require_max_len("Code", "12345", 5), Ok(()));
        assert_eq!(
            require_max_len("Code", "123456", 5),
            Err(FormError::TooLong { field: "Code", max: 5 })
        );
        assert_eq!(FormError::TooLong { field: "Code", max: 5 }.to_string(), "Code must be at most 5 characters");
    }

    #[test]
    fn clip_truncates() {
        assert_eq!(clip("1234567", 5), "12345");
        assert_eq!(clip("12", 5), "12");
    }
}
