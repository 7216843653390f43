//! Error type for validation failures
//!
//! Predicates never fail; this error only exists on the diagnostic surface
//! ([`Validate::validate`](crate::foundation::Validate::validate)) so callers
//! can report *which* format a value missed.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes.

use std::borrow::Cow;
use std::fmt;

/// Longest input excerpt kept in the `input` param.
const INPUT_EXCERPT_CHARS: usize = 64;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use litmus_validator::foundation::ValidationError;
///
/// let error = ValidationError::invalid_format("usZipCode", "1");
/// assert_eq!(error.code, "invalid_format");
/// assert_eq!(error.param("rule"), Some("usZipCode"));
/// assert_eq!(error.param("input"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically `rule` and `input`).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Creates an "invalid_format" error for `rule`, keeping a bounded
    /// excerpt of the rejected input.
    pub fn invalid_format(rule: &'static str, input: &str) -> Self {
        let excerpt: String = input.chars().take(INPUT_EXCERPT_CHARS).collect();
        Self::new(
            "invalid_format",
            format!("Value does not match the {rule} format"),
        )
        .with_param("rule", rule)
        .with_param("input", excerpt)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON structure.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_invalid_format_params() {
        let error = ValidationError::invalid_format("email", "address@not email");
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("rule"), Some("email"));
        assert_eq!(error.param("input"), Some("address@not email"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_input_excerpt_is_bounded() {
        let long = "é".repeat(500);
        let error = ValidationError::invalid_format("domain", &long);
        let excerpt = error.param("input").unwrap_or_default();
        assert_eq!(excerpt.chars().count(), INPUT_EXCERPT_CHARS);
    }

    #[test]
    fn test_display() {
        let error = ValidationError::invalid_format("ipv4", "5555.555.5.5");
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid_format: Value does not match the ipv4 format (params: [rule=ipv4, input=5555.555.5.5])"
        );
    }

    #[test]
    fn test_display_without_params() {
        let error = ValidationError::new("custom", "Something went wrong");
        assert_eq!(error.to_string(), "custom: Something went wrong");
    }

    #[test]
    fn test_zero_alloc_static_code() {
        let error = ValidationError::invalid_format("url", "nope");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Owned(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = ValidationError::invalid_format("hexColor", "#12");
        let value = error.to_json_value();
        assert_eq!(value["code"], "invalid_format");
        assert_eq!(value["params"]["rule"], "hexColor");
        assert_eq!(value["params"]["input"], "#12");
    }
}
