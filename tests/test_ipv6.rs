use proptest::prelude::*;
use uriel::parser::parse_ipv6;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_accepts_compressed_and_embedded_ipv4_forms() {
    assert!(parse_ipv6("::").is_ok());
    assert!(parse_ipv6("::1").is_ok());
    assert!(parse_ipv6("2001:db8::1").is_ok());
    assert!(parse_ipv6("2001:db8::192.168.0.1").is_ok());
    assert!(parse_ipv6("::ffff:192.168.0.1").is_ok());
}

#[test]
fn test_rejects_malformed_forms() {
    assert!(parse_ipv6("2001:db8:::1").is_err());
    assert!(parse_ipv6("2001:db8::1::").is_err());
    assert!(parse_ipv6("2001:db8::192.168").is_err());
}

#[test]
fn test_host_in_a_uri_recognises_ipv6_literal() {
    let uri = uriel::parser::parse_uri("http://[2001:db8::192.168.0.1]/").unwrap();
    assert_eq!(uri.ipv6.as_deref(), Some("2001:db8::192.168.0.1"));
}

// ------------------------------------------------------------------------------------------------
// Automated Property Tests
// ------------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = parse_ipv6(&s);
    }

    #[test]
    fn eight_colon_separated_hextets_always_accepted(
        a in 0u16..=0xffff, b in 0u16..=0xffff, c in 0u16..=0xffff, d in 0u16..=0xffff,
        e in 0u16..=0xffff, f in 0u16..=0xffff, g in 0u16..=0xffff, h in 0u16..=0xffff,
    ) {
        let s = format!("{:x}:{:x}:{:x}:{:x}:{:x}:{:x}:{:x}:{:x}", a, b, c, d, e, f, g, h);
        prop_assert!(parse_ipv6(&s).is_ok());
    }
}
