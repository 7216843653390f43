//! IP address validators: IPv4, IPv6 and either.
//!
//! Both tolerate surrounding whitespace. IPv6 accepts every compressed form,
//! an embedded dotted-quad tail (`::ffff:192.0.2.1`) and a zone id
//! (`fe80::1%eth0`).

use std::sync::LazyLock;

use regex::Regex;

use super::WHITESPACE;

/// One IPv4 octet, 0–255, no leading zeros.
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])";

/// One IPv6 group.
const H16: &str = r"[0-9A-Fa-f]{1,4}";

/// Eight alternatives, one per count of explicit leading groups. Each either
/// fills the remaining groups, compresses them with `::`, or ends with a
/// dotted quad.
const IPV6_TEMPLATE: &str = concat!(
    r"^<ws>*(?:",
    r"(?:<h16>:){7}(?:<h16>|:)",
    r"|(?:<h16>:){6}(?::<h16>|<v4>|:)",
    r"|(?:<h16>:){5}(?:(?::<h16>){1,2}|:<v4>|:)",
    r"|(?:<h16>:){4}(?:(?::<h16>){1,3}|(?::<h16>)?:<v4>|:)",
    r"|(?:<h16>:){3}(?:(?::<h16>){1,4}|(?::<h16>){0,2}:<v4>|:)",
    r"|(?:<h16>:){2}(?:(?::<h16>){1,5}|(?::<h16>){0,3}:<v4>|:)",
    r"|(?:<h16>:){1}(?:(?::<h16>){1,6}|(?::<h16>){0,4}:<v4>|:)",
    r"|:(?:(?::<h16>){1,7}|(?::<h16>){0,5}:<v4>|:)",
    r")",
    // zone id
    r"(?:%[^\n\r\x{2028}\x{2029}]+)?<ws>*$",
);

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^{WHITESPACE}*(?:{OCTET}\.){{3}}{OCTET}{WHITESPACE}*$");
    Regex::new(&pattern).unwrap()
});

static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    let dotted_quad = format!(r"{OCTET}(?:\.{OCTET}){{3}}");
    let pattern = IPV6_TEMPLATE
        .replace("<h16>", H16)
        .replace("<v4>", &dotted_quad)
        .replace("<ws>", WHITESPACE);
    Regex::new(&pattern).unwrap()
});

crate::pattern_validator! {
    /// Validates dotted-quad IPv4 addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::ipv4;
    ///
    /// assert!(ipv4("127.0.0.1"));
    /// assert!(!ipv4("2001:db8::ff00:42:8329"));
    /// assert!(!ipv4("5555.555.5.5"));
    /// assert!(!ipv4(true));
    /// ```
    pub Ipv4 as "ipv4", fn ipv4;
    description: "Dotted-quad IPv4 address, octets 0-255";
    complexity: Constant;
    tags: ["network", "ip"];
    rule(input) { IPV4.is_match(input) }
}

crate::pattern_validator! {
    /// Validates IPv6 addresses, including compressed forms, an embedded
    /// IPv4 tail and a `%zone` suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::ipv6;
    ///
    /// assert!(ipv6("2001:db8::ff00:42:8329"));
    /// assert!(!ipv6("127.0.0.1"));
    /// assert!(!ipv6("2001::::42:8329"));
    /// assert!(!ipv6(true));
    /// ```
    pub Ipv6 as "ipv6", fn ipv6;
    description: "Full or compressed IPv6 address with optional IPv4 tail and zone id";
    complexity: Linear;
    tags: ["network", "ip"];
    rule(input) { IPV6.is_match(input) }
}

crate::pattern_validator! {
    /// Validates IPv4 or IPv6 addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use litmus_validator::validators::ip;
    ///
    /// assert!(ip("2001:db8::ff00:42:8329"));
    /// assert!(ip("127.0.0.1"));
    /// assert!(!ip("1.0.287.99"));
    /// assert!(!ip("2001::::42:8329"));
    /// ```
    pub Ip as "ip", fn ip;
    description: "IPv4 or IPv6 address";
    complexity: Linear;
    tags: ["network", "ip"];
    rule(input) { Ipv4::matches(input) || Ipv6::matches(input) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("127.0.0.1")]
    #[case("0.0.0.0")]
    #[case("255.255.255.255")]
    #[case("192.168.1.10")]
    #[case("  10.0.0.1  ")]
    #[case("\t8.8.8.8\n")]
    fn valid_ipv4(#[case] input: &str) {
        assert!(ipv4(input), "{input:?} should be ipv4");
    }

    #[rstest]
    #[case("")]
    #[case("5555.555.5.5")]
    #[case("256.0.0.1")]
    #[case("1.0.287.99")]
    #[case("01.2.3.4")]
    #[case("1.2.3")]
    #[case("1.2.3.4.5")]
    #[case("1.2.3.4.")]
    #[case("1 .2.3.4")]
    #[case("2001:db8::ff00:42:8329")]
    fn invalid_ipv4(#[case] input: &str) {
        assert!(!ipv4(input), "{input:?} should not be ipv4");
    }

    #[rstest]
    #[case::bom_before("\u{feff}127.0.0.1", true)]
    #[case::bom_after("127.0.0.1\u{feff}", true)]
    #[case::nbsp("\u{a0}127.0.0.1", true)]
    #[case::next_line_after("127.0.0.1\u{85}", false)]
    #[case::next_line_before("\u{85}127.0.0.1", false)]
    fn ipv4_surrounding_whitespace(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ipv4(input), expected, "{input:?}");
        assert_eq!(ip(input), expected, "{input:?}");
    }

    #[rstest]
    #[case::bom_before("\u{feff}::1", true)]
    #[case::bom_after("fe80::1%eth0\u{feff}", true)]
    #[case::next_line_before("\u{85}::1", false)]
    #[case::next_line_after("::1\u{85}", false)]
    fn ipv6_surrounding_whitespace(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ipv6(input), expected, "{input:?}");
        assert_eq!(ip(input), expected, "{input:?}");
    }

    #[rstest]
    #[case("2001:db8::ff00:42:8329")]
    #[case("2001:0db8:0000:0000:0000:ff00:0042:8329")]
    #[case("::1")]
    #[case("::")]
    #[case("1::")]
    #[case("fe80::")]
    #[case("1:2:3:4:5:6:7::")]
    #[case("1::8")]
    #[case("1:2:3:4:5:6::8")]
    #[case("::ffff:192.0.2.128")]
    #[case("64:ff9b::192.0.2.33")]
    #[case("1:2:3:4:5:6:1.2.3.4")]
    #[case("fe80::1%eth0")]
    #[case("fe80::7:8%1")]
    #[case(" ::1 ")]
    #[case("ABCD:EF01:2345:6789:ABCD:EF01:2345:6789")]
    fn valid_ipv6(#[case] input: &str) {
        assert!(ipv6(input), "{input:?} should be ipv6");
    }

    #[rstest]
    #[case("")]
    #[case("127.0.0.1")]
    #[case("2001::::42:8329")]
    #[case("1:2:3:4:5:6:7:8:9")]
    #[case("1:2:3:4:5:6:7")]
    #[case("12345::1")]
    #[case("1::2::3")]
    #[case("g::1")]
    #[case("::ffff:256.0.0.1")]
    #[case("fe80::1%")]
    #[case(":1:2")]
    fn invalid_ipv6(#[case] input: &str) {
        assert!(!ipv6(input), "{input:?} should not be ipv6");
    }

    #[rstest]
    #[case("127.0.0.1")]
    #[case("2001:db8::ff00:42:8329")]
    #[case("1.0.287.99")]
    #[case("2001::::42:8329")]
    #[case("not an ip")]
    fn ip_is_union(#[case] input: &str) {
        assert_eq!(ip(input), ipv4(input) || ipv6(input));
    }

    #[test]
    fn non_strings() {
        assert!(!ipv4(127));
        assert!(!ipv6(false));
        assert!(!ip(None::<&str>));
        assert!(ip(String::from("::1")));
        assert!(ipv4(["127.0.0.1"]));
    }
}
