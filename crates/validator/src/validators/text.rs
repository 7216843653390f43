//! Character-class validators: alphanumeric, hexadecimal, hex colors,
//! base64 bodies and affirmative tokens.

use std::sync::LazyLock;

use regex::Regex;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static HEXADECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static BASE64: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").unwrap()
});

// ASCII-only case folding: `k` must not match U+212A KELVIN SIGN.
static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^(?:1|t(?:rue)?|y(?:es)?|o\.?k\.?(?:ay)?)$").unwrap()
});

// ============================================================================
// ALPHANUMERIC
// ============================================================================

crate::pattern_validator! {
    /// Validates non-empty ASCII letter/digit strings.
    ///
    /// Also reachable as [`alpha_numeric`].
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::{alpha_numeric, alphanumeric};
    ///
    /// assert!(alphanumeric("abc123"));
    /// assert!(!alphanumeric("*?"));
    /// assert!(!alphanumeric(""));
    /// assert_eq!(alphanumeric("ünï"), alpha_numeric("ünï"));
    /// ```
    pub Alphanumeric as "alphaNumeric", fn alphanumeric;
    description: "Non-empty ASCII letters and digits";
    complexity: Linear;
    tags: ["text"];
    rule(input) { ALPHANUMERIC.is_match(input) }
}

pub use self::alphanumeric as alpha_numeric;

// ============================================================================
// HEXADECIMAL
// ============================================================================

crate::pattern_validator! {
    /// Validates non-empty hexadecimal digit strings, either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::hexadecimal;
    ///
    /// assert!(hexadecimal("ff"));
    /// assert!(hexadecimal("ffFF"));
    /// assert!(hexadecimal("fF0"));
    /// assert!(!hexadecimal(0.287));
    /// assert!(!hexadecimal(true));
    /// ```
    pub Hexadecimal as "hexadecimal", fn hexadecimal;
    description: "Non-empty hexadecimal digits";
    complexity: Linear;
    tags: ["text", "hex"];
    rule(input) { HEXADECIMAL.is_match(input) }
}

// ============================================================================
// HEX COLOR
// ============================================================================

crate::pattern_validator! {
    /// Validates `#RGB` / `#RRGGBB` colors. The `#` is optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::hex_color;
    ///
    /// assert!(hex_color("#333"));
    /// assert!(hex_color("#444444"));
    /// assert!(hex_color("#abc123"));
    /// assert!(!hex_color(0.287));
    /// assert!(!hex_color(true));
    /// ```
    pub HexColor as "hexColor", fn hex_color;
    description: "Three or six hex digits with optional leading #";
    complexity: Constant;
    tags: ["text", "hex", "color"];
    rule(input) { HEX_COLOR.is_match(input) }
}

// ============================================================================
// BASE64
// ============================================================================

crate::pattern_validator! {
    /// Validates base64 bodies: groups of four, with `=`/`==` padding
    /// allowed only on the final group. The empty string is a valid body.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::base64;
    ///
    /// assert!(base64("ZmktaXM="));
    /// assert!(!base64("1"));
    /// ```
    pub Base64 as "base64", fn base64;
    description: "Base64 body in 4-character groups with optional final padding";
    complexity: Linear;
    tags: ["text", "encoding"];
    rule(input) { BASE64.is_match(input) }
}

// ============================================================================
// AFFIRMATIVE
// ============================================================================

crate::pattern_validator! {
    /// Validates affirmative tokens, case-insensitively: `1`, `t`, `true`,
    /// `y`, `yes`, `ok`, `o.k`, `o.k.`, `okay` and their dotted variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::affirmative;
    ///
    /// assert!(affirmative("yes"));
    /// assert!(affirmative("y"));
    /// assert!(affirmative(1));
    /// assert!(affirmative(true));
    /// assert!(!affirmative("N"));
    /// assert!(!affirmative(0));
    /// assert!(!affirmative(None::<bool>));
    /// ```
    pub Affirmative as "affirmative", fn affirmative;
    description: "Case-insensitive 1/t/true/y/yes/ok/okay token";
    complexity: Constant;
    tags: ["text", "boolean"];
    rule(input) { AFFIRMATIVE.is_match(input) }
}
