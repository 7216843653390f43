//! Phone number format validators.
//!
//! Three fixed formats, none configurable:
//! - **NANP**: North American Numbering Plan, `(609) 555-0175` and friends
//! - **EPP**: Extensible Provisioning Protocol, `+CC.NNNNNNNN[xEXT]`
//! - **International**: `+` followed by 3–19 digits, no leading zero

use std::sync::LazyLock;

use regex::Regex;

static NANP_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").unwrap()
});

static EPP_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]{1,3}\.[0-9]{4,14}(?:x[^\n\r\x{2028}\x{2029}]+)?$").unwrap()
});

static INT_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{0,4}[0-9]{2,14}?$").unwrap());

// ============================================================================
// NANP
// ============================================================================

crate::pattern_validator! {
    /// Validates North American Numbering Plan numbers.
    ///
    /// The area code may be wrapped in parentheses (each one optional);
    /// groups may be separated by `-`, `.`, a space, or nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::nanp_phone;
    ///
    /// assert!(nanp_phone("609-555-0175"));
    /// assert!(nanp_phone("(609) 555-0175"));
    /// assert!(nanp_phone(6_095_550_175_u64));
    /// assert!(!nanp_phone("1"));
    /// ```
    pub NanpPhone as "nanpPhone", fn nanp_phone;
    description: "North American Numbering Plan phone number";
    complexity: Constant;
    tags: ["phone"];
    rule(input) { NANP_PHONE.is_match(input) }
}

// ============================================================================
// EPP
// ============================================================================

crate::pattern_validator! {
    /// Validates EPP phone numbers: `+`, a 1–3 digit country code, `.`,
    /// 4–14 digits, and an optional `x` extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::epp_phone;
    ///
    /// assert!(epp_phone("+90.2322456789"));
    /// assert!(epp_phone("+1.5555550175x123"));
    /// assert!(!epp_phone("1"));
    /// ```
    pub EppPhone as "eppPhone", fn epp_phone;
    description: "Extensible Provisioning Protocol phone number";
    complexity: Constant;
    tags: ["phone"];
    rule(input) { EPP_PHONE.is_match(input) }
}

// ============================================================================
// INTERNATIONAL
// ============================================================================

crate::pattern_validator! {
    /// Validates international numbers as used by messaging apps: `+`, a
    /// non-zero digit, then 2–18 further digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::int_phone;
    ///
    /// assert!(int_phone("+140832245678901"));
    /// assert!(int_phone("+297983652"));
    /// assert!(int_phone("+126853653"));
    /// assert!(!int_phone("+0245673"));
    /// assert!(!int_phone("1"));
    /// ```
    pub IntPhone as "intPhone", fn int_phone;
    description: "International + prefixed phone number";
    complexity: Constant;
    tags: ["phone"];
    rule(input) { INT_PHONE.is_match(input) }
}
