//! US Social Security Number validator.

use std::sync::LazyLock;

use regex::Regex;

static SSN_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-8][0-9]{2})-([0-9]{2})-([0-9]{4})$").unwrap());

/// Area numbers never assigned.
const FORBIDDEN_AREAS: [&str; 2] = ["000", "666"];

crate::pattern_validator! {
    /// Validates US Social Security Numbers in `AAA-GG-SSSS` form.
    ///
    /// The area starts with 0–8 and is neither `000` nor `666`; the group is
    /// not `00`; the serial is not `0000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::social_security_number;
    ///
    /// assert!(social_security_number("017-90-7890"));
    /// assert!(!social_security_number("000-90-7890"));
    /// assert!(!social_security_number("1"));
    /// ```
    pub SocialSecurityNumber as "socialSecurityNumber", fn social_security_number;
    description: "US SSN AAA-GG-SSSS with unassigned blocks excluded";
    complexity: Constant;
    tags: ["identity"];
    rule(input) {
        SSN_SHAPE.captures(input).is_some_and(|caps| {
            let (_, [area, group, serial]) = caps.extract();
            !FORBIDDEN_AREAS.contains(&area) && group != "00" && serial != "0000"
        })
    }
}
