//! Rule registry: look rules up by their canonical names.
//!
//! Every built-in rule has a [`Rule`] variant. Names are the camelCase
//! identifiers used across the rest of the crate (`"creditCard"`,
//! `"usZipCode"`), plus the `"alphanumeric"` alias for `"alphaNumeric"`.
//!
//! # Examples
//!
//! ```
//! use litmus_validator::registry::Rule;
//!
//! let rule: Rule = "hexColor".parse().unwrap();
//! assert!(rule.is_match("#abc123"));
//! assert!(!rule.is_match(0.287));
//!
//! assert!("noSuchRule".parse::<Rule>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::foundation::{AsMatchable, Validate, ValidationResult};
use crate::validators::{
    Affirmative, Alphanumeric, Base64, CaPostalCode, CreditCard, DateString, Domain, Email,
    EppPhone, HexColor, Hexadecimal, IntPhone, Ip, Ipv4, Ipv6, NanpPhone, SocialSecurityNumber,
    TimeString, UkPostCode, Url, UsZipCode,
};

/// Alternate spelling accepted for [`Rule::AlphaNumeric`].
pub const ALPHANUMERIC_ALIAS: &str = "alphanumeric";

/// Error returned when a rule name is not known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation rule `{name}`")]
pub struct UnknownRule {
    /// The name that failed to resolve.
    pub name: String,
}

macro_rules! rules {
    ($($(#[$meta:meta])* $variant:ident => $ty:ident),+ $(,)?) => {
        /// A built-in validation rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Rule {
            $($(#[$meta])* $variant,)+
        }

        impl Rule {
            /// Every rule, in registry order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Canonical rule name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $ty::NAME,)+
                }
            }

            /// Raw string test for this rule.
            #[must_use]
            pub fn predicate(self) -> fn(&str) -> bool {
                match self {
                    $(Self::$variant => $ty::matches,)+
                }
            }

            /// The rule as a [`Validate`] trait object.
            #[must_use]
            pub fn validator(self) -> &'static dyn Validate {
                match self {
                    $(Self::$variant => &$ty,)+
                }
            }

            fn from_canonical(name: &str) -> Option<Self> {
                match name {
                    $($ty::NAME => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

rules! {
    /// Lowercase domain name.
    Domain => Domain,
    /// URL with a scheme or a `www.`/user-info prefix; a bare host is rejected.
    Url => Url,
    /// Email address.
    Email => Email,
    /// Visa, MasterCard, Amex, Diners, Discover or JCB number.
    CreditCard => CreditCard,
    /// ASCII letters and digits only.
    AlphaNumeric => Alphanumeric,
    /// 24-hour `H:M:S`.
    TimeString => TimeString,
    /// `m/d/y` or `m-d-y`.
    DateString => DateString,
    /// Padded base64.
    Base64 => Base64,
    /// US ZIP or ZIP+4.
    UsZipCode => UsZipCode,
    /// Canadian postal code.
    CaPostalCode => CaPostalCode,
    /// UK postcode.
    UkPostCode => UkPostCode,
    /// North American phone number.
    NanpPhone => NanpPhone,
    /// EPP phone number.
    EppPhone => EppPhone,
    /// International phone number.
    IntPhone => IntPhone,
    /// US Social Security Number.
    SocialSecurityNumber => SocialSecurityNumber,
    /// Yes/no style answer.
    Affirmative => Affirmative,
    /// Hexadecimal digits.
    Hexadecimal => Hexadecimal,
    /// CSS hex color.
    HexColor => HexColor,
    /// IPv4 address.
    Ipv4 => Ipv4,
    /// IPv6 address.
    Ipv6 => Ipv6,
    /// IPv4 or IPv6 address.
    Ip => Ip,
}

impl Rule {
    /// Resolves a rule by name. Case-sensitive; also accepts
    /// [`ALPHANUMERIC_ALIAS`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRule`] if no rule carries that name.
    pub fn from_name(name: &str) -> Result<Self, UnknownRule> {
        if let Some(rule) = Self::from_canonical(name) {
            return Ok(rule);
        }
        if name == ALPHANUMERIC_ALIAS {
            tracing::trace!(alias = name, rule = Alphanumeric::NAME, "resolved rule alias");
            return Ok(Self::AlphaNumeric);
        }
        tracing::trace!(name, "unknown rule name");
        Err(UnknownRule { name: name.to_owned() })
    }

    /// Stringifies `value` and tests it against this rule.
    #[must_use]
    pub fn is_match<V: AsMatchable>(self, value: V) -> bool {
        (self.predicate())(&value.as_matchable())
    }

    /// Like [`is_match`](Self::is_match), but reports why the value was
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an `invalid_format`
    /// [`ValidationError`](crate::foundation::ValidationError) naming the rule.
    pub fn check<V: AsMatchable>(self, value: V) -> ValidationResult<()> {
        let input = value.as_matchable();
        let result = self.validator().validate(&input);
        if result.is_err() {
            tracing::trace!(rule = self.name(), input_len = input.len(), "value rejected");
        }
        result
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// Every accepted rule name: the canonical names in registry order, then
/// the aliases.
pub fn names() -> impl Iterator<Item = &'static str> {
    Rule::ALL
        .iter()
        .map(|rule| rule.name())
        .chain(std::iter::once(ALPHANUMERIC_ALIAS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn registry_has_every_rule_once() {
        assert_eq!(Rule::ALL.len(), 21);
        let mut sorted = Rule::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), Rule::ALL.len());
    }

    #[rstest]
    #[case("domain", Rule::Domain)]
    #[case("creditCard", Rule::CreditCard)]
    #[case("alphaNumeric", Rule::AlphaNumeric)]
    #[case("alphanumeric", Rule::AlphaNumeric)]
    #[case("socialSecurityNumber", Rule::SocialSecurityNumber)]
    #[case("ipv6", Rule::Ipv6)]
    #[case("ip", Rule::Ip)]
    fn resolves_names(#[case] name: &str, #[case] expected: Rule) {
        assert_eq!(Rule::from_name(name), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("CreditCard")]
    #[case("credit_card")]
    #[case("IPv4")]
    #[case("zipCode")]
    fn rejects_unknown_names(#[case] name: &str) {
        let err = Rule::from_name(name).unwrap_err();
        assert_eq!(err.name, name);
    }

    #[test]
    fn unknown_rule_message() {
        let err = "nope".parse::<Rule>().unwrap_err();
        assert_eq!(err.to_string(), "unknown validation rule `nope`");
    }

    #[test]
    fn display_is_canonical_name() {
        assert_eq!(Rule::UsZipCode.to_string(), "usZipCode");
        assert_eq!(Rule::AlphaNumeric.to_string(), "alphaNumeric");
    }

    #[test]
    fn names_include_alias() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), Rule::ALL.len() + 1);
        assert_eq!(names.first(), Some(&"domain"));
        assert_eq!(names.last(), Some(&ALPHANUMERIC_ALIAS));
    }

    #[test]
    fn check_reports_rule() {
        assert!(Rule::Ipv4.check("10.0.0.1").is_ok());
        let err = Rule::Ipv4.check(5).unwrap_err();
        assert_eq!(err.param("rule"), Some("ipv4"));
        assert_eq!(err.param("input"), Some("5"));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("www.example.com", true)]
    #[case("user@example.com", true)]
    #[case("example.com", false)]
    fn url_needs_scheme_or_prefix(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(Rule::Url.is_match(input), expected);
    }

    #[test]
    fn validator_metadata_matches_rule() {
        for &rule in Rule::ALL {
            assert_eq!(rule.validator().metadata().name, rule.name());
        }
    }
}
