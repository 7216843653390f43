//! Built-in validators
//!
//! One module per rule family. Every rule is available as a boolean
//! predicate (`domain(value)`) and as a unit struct implementing
//! [`Validate`](crate::foundation::Validate) (`Domain`).
//!
//! # Categories
//!
//! - **Network**: domain, URL, email, IPv4, IPv6, IP
//! - **Payment**: credit card number
//! - **Text**: alphanumeric, hexadecimal, hex color, base64, affirmative
//! - **Temporal**: time string, date string
//! - **Postal**: US ZIP, Canadian postal code, UK postcode
//! - **Phone**: NANP, EPP, international
//! - **Identity**: US Social Security Number
//!
//! # Examples
//!
//! ```
//! use litmus_validator::validators::*;
//!
//! assert!(email("address@example.com"));
//! assert!(ip("::1"));
//! assert!(us_zip_code("02201-1020"));
//! assert!(!hex_color(0.287));
//! ```

/// Whitespace class used wherever a pattern allows whitespace. Includes
/// U+FEFF and excludes U+0085, unlike the regex engine's Unicode `\s`.
pub(crate) const WHITESPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Characters that end a line; "any character" in the patterns excludes them.
pub(crate) const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

// Network validators
pub mod ip_address;
pub mod network;

// Payment validators
pub mod credit_card;

// Text validators
pub mod text;

// Time validators
pub mod time;

// Postal validators
pub mod postal;

// Phone validators
pub mod phone;

// Identity validators
pub mod ssn;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ip_address::{Ip, Ipv4, Ipv6, ip, ipv4, ipv6};
pub use network::{Domain, Email, Url, domain, email, url};

pub use credit_card::{CreditCard, credit_card};

pub use text::{
    Affirmative, Alphanumeric, Base64, HexColor, Hexadecimal, affirmative, alpha_numeric,
    alphanumeric, base64, hex_color, hexadecimal,
};

pub use time::{DateString, TimeString, date_string, time_string};

pub use postal::{CaPostalCode, UkPostCode, UsZipCode, ca_postal_code, uk_post_code, us_zip_code};

pub use phone::{EppPhone, IntPhone, NanpPhone, epp_phone, int_phone, nanp_phone};

pub use ssn::{SocialSecurityNumber, social_security_number};
