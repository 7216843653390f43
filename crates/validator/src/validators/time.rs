//! Time-of-day and calendar date string validators.
//!
//! Both are shape checks: `dateString` accepts `2/31/2020` because it never
//! consults a calendar.

use std::sync::LazyLock;

use regex::Regex;

static TIME_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:2[0-3]|[01]?[0-9]):(?:[0-5]?[0-9]):(?:[0-5]?[0-9])$").unwrap()
});

// The separators are captured so both positions can be compared; the regex
// engine has no backreferences.
static DATE_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:1[0-2]|0?[1-9])([/-])(?:3[01]|[12][0-9]|0?[1-9])([/-])(?:[0-9]{2})?[0-9]{2}$")
        .unwrap()
});

// ============================================================================
// TIME STRING
// ============================================================================

crate::pattern_validator! {
    /// Validates 24-hour `H:M:S` time strings. Each field is one or two
    /// digits: hours 0–23, minutes and seconds 0–59.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::time_string;
    ///
    /// assert!(time_string("13:45:30"));
    /// assert!(time_string("1:2:3"));
    /// assert!(!time_string("12:12:90"));
    /// assert!(!time_string(true));
    /// ```
    pub TimeString as "timeString", fn time_string;
    description: "24-hour H:M:S time, one or two digits per field";
    complexity: Constant;
    tags: ["temporal", "time"];
    rule(input) { TIME_STRING.is_match(input) }
}

// ============================================================================
// DATE STRING
// ============================================================================

crate::pattern_validator! {
    /// Validates `m/d/y` and `m-d-y` date strings.
    ///
    /// Month 1–12 and day 1–31 take one or two digits, the year two or four.
    /// Both separators must be the same character.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::date_string;
    ///
    /// assert!(date_string("11/11/2011"));
    /// assert!(date_string("1-5-99"));
    /// assert!(!date_string("1/5"));
    /// assert!(!date_string("11/11-2011"));
    /// ```
    pub DateString as "dateString", fn date_string;
    description: "m/d/y or m-d-y date with a 2 or 4 digit year";
    complexity: Constant;
    tags: ["temporal", "date"];
    rule(input) {
        DATE_STRING
            .captures(input)
            .is_some_and(|caps| caps.get(1).map(|m| m.as_str()) == caps.get(2).map(|m| m.as_str()))
    }
}
