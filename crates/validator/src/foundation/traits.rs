//! Core traits for the validation system
//!
//! Every rule is exposed twice: as a boolean predicate function and as a
//! zero-sized type implementing [`Validate`]. The trait is the diagnostic
//! surface: it reports *why* a value was rejected and describes itself via
//! [`ValidatorMetadata`].

use crate::foundation::{AsMatchable, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators operate on the stringified form of a value. Use
/// [`validate_any`](Validate::validate_any) to validate any
/// [`AsMatchable`] value (numbers, booleans, options, JSON values) without
/// converting it first.
///
/// The trait is object-safe: `&dyn Validate` supports
/// [`validate`](Validate::validate) and [`metadata`](Validate::metadata).
///
/// # Examples
///
/// ```
/// use litmus_validator::foundation::Validate;
/// use litmus_validator::validators::HexColor;
///
/// assert!(HexColor.validate("#abc123").is_ok());
/// assert!(HexColor.validate_any(0.287).is_err());
/// assert!(HexColor.is_valid("#333"));
/// ```
pub trait Validate: Send + Sync {
    /// Validates the stringified input.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the whole input matches the format
    /// * `Err(ValidationError)` with code `invalid_format` otherwise
    fn validate(&self, input: &str) -> Result<(), ValidationError>;

    /// Describes this validator.
    fn metadata(&self) -> ValidatorMetadata;

    /// Validates any value that can be stringified for matching.
    fn validate_any<V>(&self, value: V) -> Result<(), ValidationError>
    where
        Self: Sized,
        V: AsMatchable,
    {
        self.validate(&value.as_matchable())
    }

    /// Boolean form of [`validate_any`](Validate::validate_any).
    fn is_valid<V>(&self, value: V) -> bool
    where
        Self: Sized,
        V: AsMatchable,
    {
        self.validate_any(value).is_ok()
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// Rough cost class of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationComplexity {
    /// Bounded work regardless of input length.
    Constant,
    /// Work grows linearly with input length.
    Linear,
}

/// Static description of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorMetadata {
    /// Canonical rule name, e.g. `"creditCard"`.
    pub name: &'static str,
    /// One-line description of the accepted format.
    pub description: &'static str,
    /// Cost class.
    pub complexity: ValidationComplexity,
    /// Free-form grouping tags, e.g. `["network", "ip"]`.
    pub tags: &'static [&'static str],
}

impl ValidatorMetadata {
    /// Returns true if the validator carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Ok(())
        }

        fn metadata(&self) -> ValidatorMetadata {
            ValidatorMetadata {
                name: "alwaysValid",
                description: "Accepts everything",
                complexity: ValidationComplexity::Constant,
                tags: &["test"],
            }
        }
    }

    struct ExactlyTrue;

    impl Validate for ExactlyTrue {
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input == "true" {
                Ok(())
            } else {
                Err(ValidationError::invalid_format("exactlyTrue", input))
            }
        }

        fn metadata(&self) -> ValidatorMetadata {
            ValidatorMetadata {
                name: "exactlyTrue",
                description: "Accepts the literal `true`",
                complexity: ValidationComplexity::Constant,
                tags: &[],
            }
        }
    }

    #[test]
    fn validate_any_stringifies_first() {
        assert!(ExactlyTrue.validate_any(true).is_ok());
        assert!(ExactlyTrue.validate_any("true").is_ok());
        assert!(ExactlyTrue.validate_any(1).is_err());
        assert!(ExactlyTrue.is_valid(Some(true)));
        assert!(!ExactlyTrue.is_valid(None::<bool>));
    }

    #[test]
    fn trait_objects_dispatch() {
        let validators: [&dyn Validate; 2] = [&AlwaysValid, &ExactlyTrue];
        let results: Vec<bool> = validators
            .iter()
            .map(|v| v.validate("false").is_ok())
            .collect();
        assert_eq!(results, vec![true, false]);
    }

    #[test]
    fn metadata_tags() {
        let metadata = AlwaysValid.metadata();
        assert!(metadata.has_tag("test"));
        assert!(!metadata.has_tag("network"));
        assert_eq!(metadata.complexity, ValidationComplexity::Constant);
    }
}
