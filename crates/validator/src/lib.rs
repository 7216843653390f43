//! # litmus-validator
//!
//! Pure boolean validators for well-known literal formats: network
//! addresses, postal codes, phone numbers, payment cards, dates and times.
//!
//! ## Quick Start
//!
//! ```
//! use litmus_validator::prelude::*;
//!
//! assert!(email("address@example.com"));
//! assert!(ipv4("198.156.23.5"));
//! assert!(!time_string("12:12:90"));
//!
//! // Values are stringified before matching, so numbers work too.
//! assert!(credit_card(378_282_246_310_005_u64));
//! assert!(!hex_color(0.287));
//! ```
//!
//! ## Three Ways to Call a Rule
//!
//! - **Predicate**: `domain(value)` returns `bool` for any
//!   [`AsMatchable`](foundation::AsMatchable) value
//! - **Validator**: [`Domain`](validators::Domain) implements
//!   [`Validate`](foundation::Validate) and reports a
//!   [`ValidationError`](foundation::ValidationError) on rejection
//! - **Registry**: [`Rule`] resolves rules by name, e.g. from configuration
//!
//! ## Built-in Rules
//!
//! - **Network**: [`domain`], [`url`], [`email`], [`ipv4`], [`ipv6`], [`ip`]
//! - **Payment**: [`credit_card`]
//! - **Text**: [`alpha_numeric`], [`hexadecimal`], [`hex_color`], [`base64`],
//!   [`affirmative`]
//! - **Temporal**: [`time_string`], [`date_string`]
//! - **Postal**: [`us_zip_code`], [`ca_postal_code`], [`uk_post_code`]
//! - **Phone**: [`nanp_phone`], [`epp_phone`], [`int_phone`]
//! - **Identity**: [`social_security_number`]
//!
//! ## Feature Flags
//!
//! - `serde` (default): `serde_json::Value` inputs, JSON error output and
//!   `Rule` (de)serialization by name

// ValidationError is returned by value from every validator.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use registry::{Rule, UnknownRule};
pub use validators::{
    affirmative, alpha_numeric, alphanumeric, base64, ca_postal_code, credit_card, date_string,
    domain, email, epp_phone, hex_color, hexadecimal, int_phone, ip, ipv4, ipv6, nanp_phone,
    social_security_number, time_string, uk_post_code, url, us_zip_code,
};
