//! Core validation types and traits
//!
//! This module contains the building blocks shared by every rule:
//!
//! - **Traits**: [`Validate`], [`AsMatchable`]
//! - **Errors**: [`ValidationError`]
//! - **Metadata**: [`ValidatorMetadata`], [`ValidationComplexity`]
//!
//! # Architecture
//!
//! ## 1. Totality
//!
//! Predicates are total: any value that implements [`AsMatchable`] yields a
//! `bool`, and no validator panics on any input.
//!
//! ## 2. Loose input, strict patterns
//!
//! Inputs are stringified first ([`AsMatchable`]) and then matched against a
//! fully-anchored pattern compiled once per process.
//!
//! ```
//! use litmus_validator::foundation::Validate;
//! use litmus_validator::validators::Domain;
//!
//! assert!(Domain.validate("example.com").is_ok());
//! assert!(Domain.validate_any(1234).is_err());
//! ```

pub mod error;
pub mod matchable;
pub mod traits;

pub use error::ValidationError;
pub use matchable::AsMatchable;
pub use traits::{Validate, ValidationComplexity, ValidatorMetadata};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
