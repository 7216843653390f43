//! Domain name, URL and email address validators.
//!
//! These are literal-format checks, not resolvers: nothing here touches DNS
//! and nothing is normalized before matching.

use std::sync::LazyLock;

use regex::Regex;

use super::WHITESPACE;

/// Dot-separated DNS labels, lowercase only. At least two labels; the last
/// one is at least two characters long.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .unwrap()
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(",
        // scheme:[//][userinfo@]host  |  www.host  |  userinfo@host
        r"(([A-Za-z]{3,9}:(?://)?)(?:[-;:&=+$,0-9A-Za-z_]+@)?[A-Za-z0-9.-]+",
        r"|(?:www\.|[-;:&=+$,0-9A-Za-z_]+@)[A-Za-z0-9.-]+)",
        r"(:[0-9]+)?",
        // path, query, fragment
        r"((?:/[+~%/.0-9A-Za-z_\-]*)?\??(?:[-+=&;%@.0-9A-Za-z_]*)#?(?:[.!/\\0-9A-Za-z_]*))?",
        r")$",
    ))
    .unwrap()
});

/// Local part: dot-separated atoms or a quoted string. Domain: one or more
/// labels followed by a final label of at least two characters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r#"[^<>()\[\].,;:@"{WHITESPACE}]"#);
    let pattern = format!(
        r#"^(({atom}+(\.{atom}+)*)|("[^\n\r\x{{2028}}\x{{2029}}]+"))@(({atom}+\.)+{atom}{{2,}})$"#
    );
    Regex::new(&pattern).unwrap()
});

// ============================================================================
// DOMAIN
// ============================================================================

crate::pattern_validator! {
    /// Validates domain names.
    ///
    /// Labels are `[a-z0-9-]`, 1–63 characters, with no leading or trailing
    /// hyphen. Uppercase letters and single-label names are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::domain;
    ///
    /// assert!(domain("example.com"));
    /// assert!(domain("sub.domain.example.website"));
    /// assert!(!domain("not_a_domain"));
    /// assert!(!domain(1234));
    /// ```
    pub Domain as "domain", fn domain;
    description: "Dot-separated DNS labels";
    complexity: Linear;
    tags: ["network", "hostname"];
    rule(input) { DOMAIN.is_match(input) }
}

// ============================================================================
// URL
// ============================================================================

crate::pattern_validator! {
    /// Validates URL-like strings.
    ///
    /// Accepts `scheme:` (3–9 letters, optional `//`) or a `www.` / user-info
    /// prefix, a host of `[A-Za-z0-9.-]`, an optional port and an optional
    /// path/query/fragment tail. The host is not checked beyond its
    /// character set.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::url;
    ///
    /// assert!(url("http://example.com"));
    /// assert!(url("www.example.com/index.html"));
    /// assert!(!url("http://not url dot com"));
    /// assert!(!url(true));
    /// ```
    pub Url as "url", fn url;
    description: "Absolute or www./user-info prefixed URL";
    complexity: Linear;
    tags: ["network", "url"];
    rule(input) { URL.is_match(input) }
}

// ============================================================================
// EMAIL
// ============================================================================

crate::pattern_validator! {
    /// Validates email addresses of the form `local@domain`.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::email;
    ///
    /// assert!(email("address@example.com"));
    /// assert!(email("\"john doe\"@example.com"));
    /// assert!(!email("address@not email"));
    /// assert!(!email(true));
    /// ```
    pub Email as "email", fn email;
    description: "Local part, @, and a dotted domain with a 2+ character final label";
    complexity: Linear;
    tags: ["network", "email"];
    rule(input) { EMAIL.is_match(input) }
}

// ============================================================================
// TESTS
// ============================================================================
