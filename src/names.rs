use once_cell::sync::Lazy;
use regex::Regex;

use crate::ConvertError;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").expect("name pattern is valid")
});

/// Check that `name` is a valid DSL identifier and hand it back unchanged.
pub fn validate(name: &str) -> Result<&str, ConvertError> {
    if NAME_RE.is_match(name) {
        Ok(name)
    } else {
        Err(ConvertError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_pass_through() {
        for name in ["a", "_", "_private", "server_port", "Value2", "x_1_y"] {
            assert_eq!(validate(name), Ok(name));
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "1abc", "9", "with-dash", "has space", "dot.ted", "ümlaut", "a$"] {
            assert_eq!(
                validate(name),
                Err(ConvertError::InvalidName(name.to_string())),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_trailing_newline_is_rejected() {
        assert!(validate("name\n").is_err());
    }
}
