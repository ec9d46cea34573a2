use uriel::template::{format_uri_template, get_uri_template_variables, parse_uri_template, Operator};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_literal_only_template_has_no_variables() {
    let t = parse_uri_template("/static/path").unwrap();
    assert!(get_uri_template_variables(&t).is_empty());
    assert_eq!(format_uri_template(&t), "/static/path");
}

#[test]
fn test_mixed_literal_and_expression_parts() {
    let t = parse_uri_template("/search{?term,lang}").unwrap();
    let names: Vec<&str> = get_uri_template_variables(&t).iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["term", "lang"]);
}

#[test]
fn test_non_uri_literal_is_percent_encoded_at_parse_time() {
    let t = parse_uri_template("§1").unwrap();
    assert_eq!(format_uri_template(&t), "%C2%A71");
}

#[test]
fn test_unclosed_expression_is_rejected() {
    assert!(parse_uri_template("{var").is_err());
}

#[test]
fn test_reserved_operators_are_rejected() {
    assert!(parse_uri_template("{=var}").is_err());
    assert!(parse_uri_template("{!var}").is_err());
    assert!(parse_uri_template("{@var}").is_err());
}

#[test]
fn test_empty_expression_is_rejected() {
    assert!(parse_uri_template("{}").is_err());
}

#[test]
fn test_explode_and_max_length_variable_specifiers() {
    let t = parse_uri_template("{list*,var:4}").unwrap();
    let vars = get_uri_template_variables(&t);
    assert!(vars[0].explode);
    assert_eq!(vars[1].max_length, 4);
}

#[test]
fn test_max_length_must_not_start_with_zero() {
    assert!(parse_uri_template("{var:0}").is_err());
    assert!(parse_uri_template("{var:01}").is_err());
}

#[test]
fn test_empty_variable_name_is_rejected() {
    assert!(parse_uri_template("{,var}").is_err());
}

#[test]
fn test_operator_defaults_apply_to_every_variable_in_expression() {
    let t = parse_uri_template("{?a,b}").unwrap();
    if let uriel::template::Part::Expression(e) = &t.parts[0] {
        assert_eq!(e.operator, Operator::Query);
        assert_eq!(e.first, "?");
        assert_eq!(e.separator, "&");
    } else {
        panic!("expected a single expression part");
    }
}
