//! Prelude module for convenient imports.
//!
//! Provides a single `use litmus_validator::prelude::*;` import that brings
//! in the core traits, every rule (predicate and struct) and the registry.
//!
//! # Examples
//!
//! ```
//! use litmus_validator::prelude::*;
//!
//! assert!(us_zip_code("02201-1020"));
//! assert!(UsZipCode.validate("0220").is_err());
//! assert!(Rule::UsZipCode.is_match(90210));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, metadata
// ============================================================================

pub use crate::foundation::{
    AsMatchable, Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// REGISTRY: Lookup by name
// ============================================================================

pub use crate::registry::{Rule, UnknownRule};
