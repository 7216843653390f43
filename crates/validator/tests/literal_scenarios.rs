//! Documented accept/reject examples for every rule, exercised through the
//! public predicates.

use litmus_validator::prelude::*;
use rstest::rstest;

#[test]
fn domain_scenarios() {
    assert!(domain("example.com"));
    assert!(!domain("not_a_domain"));
    assert!(!domain(1234));
}

#[test]
fn email_scenarios() {
    assert!(email("address@example.com"));
    assert!(!email("address@not email"));
}

#[test]
fn credit_card_scenarios() {
    assert!(credit_card("378282246310005"));
    assert!(credit_card(378_282_246_310_005_u64));
    assert!(!credit_card("123"));
}

#[test]
fn ip_scenarios() {
    assert!(ipv4("127.0.0.1"));
    assert!(!ipv4("2001:db8::ff00:42:8329"));
    assert!(!ipv4("5555.555.5.5"));

    assert!(ipv6("2001:db8::ff00:42:8329"));
    assert!(!ipv6("127.0.0.1"));
    assert!(!ipv6("2001::::42:8329"));

    assert!(ip("127.0.0.1"));
    assert!(ip("2001:db8::ff00:42:8329"));
    assert!(!ip("1.0.287.99"));
}

#[test]
fn postal_scenarios() {
    assert!(us_zip_code("02201-1020"));
    assert!(!us_zip_code("1"));
    assert!(ca_postal_code("L8V 3Y1"));
    assert!(uk_post_code("B184BJ"));
}

#[test]
fn phone_scenarios() {
    assert!(nanp_phone("609-555-0175"));
    assert!(epp_phone("+90.2322456789"));
    assert!(int_phone("+140832245678901"));
    assert!(!int_phone("+0245673"));
}

#[test]
fn temporal_scenarios() {
    assert!(time_string("13:45:30"));
    assert!(!time_string("12:12:90"));
    assert!(date_string("11/11/2011"));
    assert!(!date_string("1/5"));
}

#[test]
fn text_scenarios() {
    assert!(base64("ZmktaXM="));
    assert!(!base64("1"));
    assert!(hex_color("#333"));
    assert!(hex_color("#abc123"));
    assert!(!hex_color(0.287));
    assert!(hexadecimal("f0f0f0"));
    assert!(alpha_numeric("abc123"));
    assert!(!alpha_numeric("abc 123"));
}

#[test]
fn social_security_number_scenarios() {
    assert!(social_security_number("017-90-7890"));
    assert!(!social_security_number("000-90-7890"));
}

#[rstest]
#[case::yes("yes")]
#[case::y("y")]
#[case::upper_yes("YES")]
#[case::ok("ok")]
#[case::okay("Okay")]
#[case::dotted("o.k.")]
#[case::one("1")]
#[case::t("t")]
fn affirmative_accepts(#[case] input: &str) {
    assert!(affirmative(input));
}

#[rstest]
#[case::no("N")]
#[case::zero("0")]
#[case::word("nope")]
#[case::yess("yess")]
fn affirmative_rejects(#[case] input: &str) {
    assert!(!affirmative(input));
}

#[test]
fn affirmative_non_string_values() {
    assert!(affirmative(true));
    assert!(affirmative(1));
    assert!(!affirmative(0));
    assert!(!affirmative(false));
    assert!(!affirmative(None::<&str>));
    assert!(!affirmative(()));
}

#[cfg(feature = "serde")]
mod json_values {
    use litmus_validator::prelude::*;
    use serde_json::json;

    #[test]
    fn objects_never_match() {
        assert!(!affirmative(&json!({})));
        assert!(!alpha_numeric(json!({"a": 1})));
        assert!(!domain(json!({})));
    }

    #[test]
    fn json_scalars_stringify() {
        assert!(affirmative(json!(true)));
        assert!(affirmative(json!("yes")));
        assert!(!affirmative(json!(null)));
        assert!(us_zip_code(json!(90210)));
        assert!(!hex_color(json!(0.287)));
    }

    #[test]
    fn json_arrays_join_with_commas() {
        // [1, 2] stringifies as "1,2"
        assert!(!alpha_numeric(json!([1, 2])));
        assert!(alpha_numeric(json!(["abc"])));
    }
}
