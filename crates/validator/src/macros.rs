//! Macros for declaring pattern validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`pattern_validator!`]: create a complete rule (unit struct + `Validate`
//!   impl + boolean predicate fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::LazyLock;
//! use regex::Regex;
//!
//! static US_ZIP_CODE: LazyLock<Regex> =
//!     LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());
//!
//! pattern_validator! {
//!     /// Validates US ZIP codes.
//!     pub UsZipCode as "usZipCode", fn us_zip_code;
//!     description: "Five digits, optionally followed by -NNNN";
//!     complexity: Constant;
//!     tags: ["postal"];
//!     rule(input) { US_ZIP_CODE.is_match(input) }
//! }
//! ```

// ============================================================================
// PATTERN VALIDATOR MACRO
// ============================================================================

/// Creates a complete rule: a zero-sized struct, its [`Validate`]
/// implementation, and a boolean predicate function over any
/// [`AsMatchable`] value.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied to the struct.
///
/// The generated items are:
///
/// - `pub struct $name;` with `$name::NAME` (the canonical rule name) and
///   `$name::matches(&str) -> bool` (the raw string test)
/// - `impl Validate for $name`, failing with
///   [`ValidationError::invalid_format`]
/// - `pub fn $predicate(value: impl AsMatchable) -> bool`
///
/// [`Validate`]: crate::foundation::Validate
/// [`AsMatchable`]: crate::foundation::AsMatchable
/// [`ValidationError::invalid_format`]: crate::foundation::ValidationError::invalid_format
#[macro_export]
macro_rules! pattern_validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $rule_name:literal, fn $predicate:ident;
        description: $description:literal;
        complexity: $complexity:ident;
        tags: [$($tag:literal),* $(,)?];
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// Canonical rule name.
            pub const NAME: &'static str = $rule_name;

            /// Tests the whole of the input string against this format.
            #[must_use]
            pub fn matches($inp: &str) -> bool $rule
        }

        impl $crate::foundation::Validate for $name {
            fn validate(&self, input: &str) -> Result<(), $crate::foundation::ValidationError> {
                if Self::matches(input) {
                    Ok(())
                } else {
                    Err($crate::foundation::ValidationError::invalid_format(Self::NAME, input))
                }
            }

            fn metadata(&self) -> $crate::foundation::ValidatorMetadata {
                $crate::foundation::ValidatorMetadata {
                    name: Self::NAME,
                    description: $description,
                    complexity: $crate::foundation::ValidationComplexity::$complexity,
                    tags: &[$($tag),*],
                }
            }
        }

        #[doc = concat!("Checks whether a value matches the `", $rule_name, "` format.")]
        #[doc = ""]
        #[doc = concat!("Stringifies the value first, then defers to [`", stringify!($name), "::matches`].")]
        #[must_use]
        $vis fn $predicate<V: $crate::foundation::AsMatchable>(value: V) -> bool {
            $name::matches(&$crate::foundation::AsMatchable::as_matchable(&value))
        }
    };
}
