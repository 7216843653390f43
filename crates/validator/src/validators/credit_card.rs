//! Credit card number validator.
//!
//! Checks issuer prefix and length only. There is no Luhn checksum: the
//! format is the contract, not the card's validity.

use std::sync::LazyLock;

use regex::Regex;

static CREDIT_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"(4[0-9]{12}(?:[0-9]{3})?)",                 // Visa, 13 or 16 digits
        r"|(5[1-5][0-9]{14})",                         // MasterCard
        r"|(6(?:011|5[0-9]{2})[0-9]{12})",             // Discover
        r"|(3[47][0-9]{13})",                          // American Express
        r"|(3(?:0[0-5]|[68][0-9])[0-9]{11})",          // Diners Club
        r"|((?:2131|1800|35[0-9]{3})[0-9]{11})",       // JCB
        r")$",
    ))
    .unwrap()
});

crate::pattern_validator! {
    /// Validates major credit card number formats (Visa, MasterCard,
    /// Discover, American Express, Diners Club, JCB). Digits only, no
    /// separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::credit_card;
    ///
    /// assert!(credit_card("378282246310005"));
    /// assert!(credit_card(378_282_246_310_005_u64));
    /// assert!(!credit_card("123"));
    /// assert!(!credit_card(true));
    /// ```
    pub CreditCard as "creditCard", fn credit_card;
    description: "Issuer-prefixed card number of the issuer's length";
    complexity: Constant;
    tags: ["payment"];
    rule(input) { CREDIT_CARD.is_match(input) }
}
