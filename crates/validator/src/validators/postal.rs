//! Postal code validators: US ZIP, Canadian postal code, UK postcode.
//!
//! All three are uppercase-only shape checks; no lookup against real
//! delivery areas is made.

use std::sync::LazyLock;

use regex::Regex;

use super::{LINE_TERMINATORS, WHITESPACE};

static US_ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());

/// Shape only: `A9A 9A9` with the first letter outside W and Z. The letters
/// D, F, I, O, Q and U are excluded separately.
static CA_POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-VXY][0-9][A-Z]{WHITESPACE}?[0-9][A-Z][0-9]$")).unwrap()
});

/// Letters never used in a Canadian postal code. Only the first line is
/// checked; a line terminator in the separator position ends the scan.
const CA_EXCLUDED_LETTERS: [char; 6] = ['D', 'F', 'I', 'O', 'Q', 'U'];

static UK_POST_CODE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        // second branch: two letters and four digits, e.g. forces postcodes
        r"^[A-Z]{{1,2}}[0-9RCHNQ][0-9A-Z]?{WHITESPACE}?[0-9][ABD-HJLNP-UW-Z]{{2}}$|^[A-Z]{{2}}-?[0-9]{{4}}$"
    );
    Regex::new(&pattern).unwrap()
});

// ============================================================================
// US ZIP CODE
// ============================================================================

crate::pattern_validator! {
    /// Validates US ZIP and ZIP+4 codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::us_zip_code;
    ///
    /// assert!(us_zip_code("02201-1020"));
    /// assert!(us_zip_code("02201"));
    /// assert!(!us_zip_code("1"));
    /// assert!(!us_zip_code(true));
    /// ```
    pub UsZipCode as "usZipCode", fn us_zip_code;
    description: "Five digits, optionally followed by -NNNN";
    complexity: Constant;
    tags: ["postal"];
    rule(input) { US_ZIP_CODE.is_match(input) }
}

// ============================================================================
// CANADIAN POSTAL CODE
// ============================================================================

crate::pattern_validator! {
    /// Validates Canadian postal codes (`A9A 9A9`, space optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::ca_postal_code;
    ///
    /// assert!(ca_postal_code("L8V3Y1"));
    /// assert!(ca_postal_code("L8V 3Y1"));
    /// assert!(!ca_postal_code("D8V 3Y1"));
    /// assert!(!ca_postal_code("1"));
    /// ```
    pub CaPostalCode as "caPostalCode", fn ca_postal_code;
    description: "Canadian A9A 9A9 postal code without D, F, I, O, Q, U";
    complexity: Constant;
    tags: ["postal"];
    rule(input) {
        let first_line = input.split(LINE_TERMINATORS).next().unwrap_or_default();
        CA_POSTAL_CODE.is_match(input) && !first_line.contains(CA_EXCLUDED_LETTERS)
    }
}

// ============================================================================
// UK POST CODE
// ============================================================================

crate::pattern_validator! {
    /// Validates UK postcodes, plus the two-letter/four-digit form
    /// (`BF-1234`, hyphen optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::uk_post_code;
    ///
    /// assert!(uk_post_code("B184BJ"));
    /// assert!(uk_post_code("SW1A 1AA"));
    /// assert!(uk_post_code("BF1234"));
    /// assert!(!uk_post_code("1"));
    /// ```
    pub UkPostCode as "ukPostCode", fn uk_post_code;
    description: "UK postcode or two letters and four digits";
    complexity: Constant;
    tags: ["postal"];
    rule(input) { UK_POST_CODE.is_match(input) }
}
