use indexmap::IndexMap;
use uriel::template::{expand_uri_template, expand_uri_variable, create_uri_variable, Value};

fn bindings(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_rfc6570_level_1_simple_string_expansion() {
    let b = bindings(&[
        ("var", Value::from("value")),
        ("hello", Value::from("Hello World!")),
    ]);
    assert_eq!(expand_uri_template("{var}", &b).unwrap(), "value");
    assert_eq!(expand_uri_template("{hello}", &b).unwrap(), "Hello%20World%21");
}

#[test]
fn test_rfc6570_level_2_reserved_and_fragment_expansion() {
    let b = bindings(&[("path", Value::from("/foo/bar"))]);
    assert_eq!(expand_uri_template("{+path}/here", &b).unwrap(), "/foo/bar/here");
    assert_eq!(expand_uri_template("X{#path}", &b).unwrap(), "X#/foo/bar");
}

#[test]
fn test_rfc6570_level_3_multiple_variables_and_operators() {
    let b = bindings(&[("x", Value::from("1024")), ("y", Value::from("768"))]);
    assert_eq!(expand_uri_template("map?{x,y}", &b).unwrap(), "map?1024,768");
    assert_eq!(expand_uri_template("{x,hello,y}", &b).unwrap(), "1024,768");
    assert_eq!(expand_uri_template("{?x,y}", &b).unwrap(), "?x=1024&y=768");
}

#[test]
fn test_label_and_path_segment_operators() {
    let b = bindings(&[("who", Value::from("fred")), ("list", Value::from(vec!["red", "green", "blue"]))]);
    assert_eq!(expand_uri_template("X{.who}", &b).unwrap(), "X.fred");
    assert_eq!(expand_uri_template("{/who}", &b).unwrap(), "/fred");
    assert_eq!(expand_uri_template("{/list}", &b).unwrap(), "/red,green,blue");
    assert_eq!(expand_uri_template("{/list*}", &b).unwrap(), "/red/green/blue");
}

#[test]
fn test_path_style_parameters_and_query_continuation() {
    let b = bindings(&[("x", Value::from("1024")), ("y", Value::from("768")), ("empty", Value::from(""))]);
    assert_eq!(expand_uri_template("{;x,y}", &b).unwrap(), ";x=1024;y=768");
    assert_eq!(expand_uri_template("{;empty}", &b).unwrap(), ";empty");
    assert_eq!(expand_uri_template("?fixed=yes{&x}", &b).unwrap(), "?fixed=yes&x=1024");
}

#[test]
fn test_deep_object_extension_flattens_nested_bindings() {
    // The deep-object extension is not part of any RFC 6570 operator syntax, so it is opted
    // into on a `Variable` directly rather than via a template string.
    let mut address = IndexMap::new();
    address.insert("city".to_string(), Value::from("Berlin"));
    address.insert("country".to_string(), Value::from("DE"));
    let mut q = IndexMap::new();
    q.insert("address".to_string(), Value::Map(address));

    let var = create_uri_variable("q");
    let var = uriel::template::Variable { explode: true, deep_object: true, named: true, ..var };
    let rendered = expand_uri_variable(&var, &Value::Map(q)).unwrap();
    assert!(rendered.contains("q[address][city]=Berlin"));
    assert!(rendered.contains("q[address][country]=DE"));
}

#[test]
fn test_unbound_variables_expand_to_empty_expression() {
    let b: IndexMap<String, Value> = IndexMap::new();
    assert_eq!(expand_uri_template("{missing}", &b).unwrap(), "");
    assert_eq!(expand_uri_template("/widgets{/missing}", &b).unwrap(), "/widgets");
}

#[test]
fn test_default_json_coercion_for_non_string_scalars() {
    let b = bindings(&[("n", Value::from(42)), ("flag", Value::from(true))]);
    assert_eq!(expand_uri_template("{n}", &b).unwrap(), "42");
    assert_eq!(expand_uri_template("{flag}", &b).unwrap(), "true");
}

#[test]
fn test_callback_bindings_source() {
    let lookup = |name: &str| -> Value {
        if name == "id" {
            Value::from("42")
        } else {
            Value::Null
        }
    };
    assert_eq!(expand_uri_template("/widgets/{id}", uriel::template::Bindings::Fn(&lookup)).unwrap(), "/widgets/42");
}

#[test]
fn test_end_to_end_template_then_parse_result_is_a_valid_uri() {
    let b = bindings(&[("id", Value::from("42"))]);
    let href = expand_uri_template("https://example.com/widgets/{id}{?debug}", &b).unwrap();
    assert_eq!(href, "https://example.com/widgets/42");
    assert!(uriel::parser::is_valid_uri(&href));
}
