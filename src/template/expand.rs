/*!
RFC 6570 expansion: walk a [`Template`]'s parts, concatenating literals verbatim and the result of
[`expand_uri_expression`] for each [`Expression`], against a set of variable bindings.
*/

use crate::lex::pct_encode;
use crate::template::error::Result;
use crate::template::model::{Expression, Template, Value, Variable};
use crate::template::parser::parse_uri_template;
use indexmap::IndexMap;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A source of variable bindings: either a fixed map or a callback, so that callers with a lazily
/// computed binding set (or one backed by something other than a map) do not need to materialise
/// one up front.
///
pub enum Bindings<'a> {
    Map(&'a IndexMap<String, Value>),
    Fn(&'a dyn Fn(&str) -> Value),
}

impl<'a> Bindings<'a> {
    fn lookup(&self, name: &str) -> Value {
        match self {
            Bindings::Map(m) => m.get(name).cloned().unwrap_or(Value::Null),
            Bindings::Fn(f) => f(name),
        }
    }
}

impl<'a> From<&'a IndexMap<String, Value>> for Bindings<'a> {
    fn from(m: &'a IndexMap<String, Value>) -> Self {
        Bindings::Map(m)
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parse (if given a string) and expand a URI Template against `bindings`.
pub fn expand_uri_template<'a, T, B>(template: T, bindings: B) -> Result<String>
where
    T: AsTemplate,
    B: Into<Bindings<'a>>,
{
    let template = template.as_template()?;
    let bindings = bindings.into();
    let mut out = String::new();
    for part in &template.parts {
        match part {
            crate::template::model::Part::Literal(s) => out.push_str(s),
            crate::template::model::Part::Expression(e) => out.push_str(&expand_uri_expression(e, &bindings)),
        }
    }
    Ok(out)
}

/// Accepts either an already-parsed [`Template`] or a template string, so
/// [`expand_uri_template`] can take either without two entry points.
pub trait AsTemplate {
    fn as_template(&self) -> Result<Template>;
}

impl AsTemplate for Template {
    fn as_template(&self) -> Result<Template> {
        Ok(self.clone())
    }
}

impl AsTemplate for str {
    fn as_template(&self) -> Result<Template> {
        parse_uri_template(self)
    }
}

impl AsTemplate for String {
    fn as_template(&self) -> Result<Template> {
        parse_uri_template(self)
    }
}

///
/// Expand a single expression against `bindings`. Infallible: a well-formed expression and any
/// bindings always produce a string (absent values are silently skipped).
///
pub fn expand_uri_expression(expr: &Expression, bindings: &Bindings<'_>) -> String {
    let mut out = String::new();
    let mut first_emitted = false;

    for var in &expr.variables {
        let value = bindings.lookup(&var.name);
        if matches!(value, Value::Null) {
            continue;
        }
        if let Some(rendered) = expand_uri_variable(var, &value) {
            if !first_emitted {
                out.push_str(&expr.first);
                first_emitted = true;
            } else {
                out.push_str(&expr.separator);
            }
            out.push_str(&rendered);
        }
    }

    out
}

///
/// Expand a single variable against its bound `value`. Returns `None` when the value is wholly
/// absent (every element/pair coerced to "absent"), in which case the caller emits neither a
/// separator nor any text for this variable.
///
pub fn expand_uri_variable(var: &Variable, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Scalar(_) => Some(expand_scalar(var, value)),
        Value::List(items) => {
            if var.explode {
                expand_exploded_list(var, items)
            } else {
                expand_joined_list(var, items)
            }
        }
        Value::Map(map) => {
            if var.explode && var.deep_object {
                expand_deep_object(var, map)
            } else if var.explode {
                expand_exploded_map(var, map)
            } else {
                expand_joined_map(var, map)
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions — coercion
// ------------------------------------------------------------------------------------------------

fn coerce(var: &Variable, value: &Value) -> Option<String> {
    if let Some(hook) = &var.coerce {
        return hook(value);
    }
    default_coerce(value)
}

/// Strings pass through. Numbers/booleans/other JSON-serialisable scalars are JSON-rendered.
/// `Null` (and any aggregate handed where a scalar was expected) is "absent".
fn default_coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Scalar(s) => Some(s.clone()),
        Value::List(_) | Value::Map(_) => serde_json::to_string(&to_json(value)).ok(),
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Scalar(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Map(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                obj.insert(k.clone(), to_json(v));
            }
            serde_json::Value::Object(obj)
        }
    }
}

/// The first `n` Unicode scalar values of `s` (`n <= 0` means unlimited).
fn prefix(s: &str, n: i32) -> String {
    if n <= 0 {
        s.to_string()
    } else {
        s.chars().take(n as usize).collect()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions — string expansion
// ------------------------------------------------------------------------------------------------

fn expand_scalar(var: &Variable, value: &Value) -> String {
    let s = coerce(var, value).unwrap_or_default();
    let truncated = prefix(&s, var.max_length);
    if var.named {
        if truncated.is_empty() {
            format!("{}{}", var.name, var.empty)
        } else {
            format!("{}={}", var.name, pct_encode(&truncated, var.allow))
        }
    } else {
        pct_encode(&truncated, var.allow)
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions — composite (joined) expansion
// ------------------------------------------------------------------------------------------------

fn expand_joined_list(var: &Variable, items: &[Value]) -> Option<String> {
    let rendered: Vec<String> = items
        .iter()
        .filter_map(|v| coerce(var, v))
        .map(|s| pct_encode(&prefix(&s, var.max_length), var.allow))
        .collect();
    if rendered.is_empty() {
        return None;
    }
    let joined = rendered.join(&var.composite_separator);
    Some(if var.named {
        format!("{}={}", var.name, joined)
    } else {
        joined
    })
}

fn expand_joined_map(var: &Variable, map: &IndexMap<String, Value>) -> Option<String> {
    let rendered: Vec<String> = map
        .iter()
        .filter_map(|(k, v)| coerce(var, v).map(|s| (k, s)))
        .map(|(k, s)| {
            format!(
                "{},{}",
                pct_encode(k, var.allow),
                pct_encode(&prefix(&s, var.max_length), var.allow)
            )
        })
        .collect();
    if rendered.is_empty() {
        return None;
    }
    let joined = rendered.join(&var.composite_separator);
    Some(if var.named {
        format!("{}={}", var.name, joined)
    } else {
        joined
    })
}

// ------------------------------------------------------------------------------------------------
// Private Functions — exploded composite expansion
// ------------------------------------------------------------------------------------------------

fn expand_exploded_list(var: &Variable, items: &[Value]) -> Option<String> {
    let rendered: Vec<String> = items
        .iter()
        .filter_map(|v| coerce(var, v))
        .map(|s| {
            let truncated = prefix(&s, var.max_length);
            if var.named {
                if truncated.is_empty() {
                    format!("{}{}", var.name, var.empty)
                } else {
                    format!("{}={}", var.name, pct_encode(&truncated, var.allow))
                }
            } else {
                pct_encode(&truncated, var.allow)
            }
        })
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(&var.separator))
    }
}

fn expand_exploded_map(var: &Variable, map: &IndexMap<String, Value>) -> Option<String> {
    let rendered: Vec<String> = map
        .iter()
        .filter_map(|(k, v)| coerce(var, v).map(|s| (k, s)))
        .map(|(k, s)| {
            let truncated = prefix(&s, var.max_length);
            if truncated.is_empty() {
                format!("{}{}", pct_encode(k, var.allow), var.empty)
            } else {
                format!("{}={}", pct_encode(k, var.allow), pct_encode(&truncated, var.allow))
            }
        })
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(&var.separator))
    }
}

/// The deep-object extension: flatten `map` depth-first into `name[k1][k2].../leaf` pairs. Cycles
/// cannot occur structurally (`Value` is an owned tree, not a graph of references), but nested
/// maps are still bounded by `visited` tracking each node's address, matching the defensive
/// posture the spec calls for in case a future `Value` variant introduces sharing.
fn expand_deep_object(var: &Variable, map: &IndexMap<String, Value>) -> Option<String> {
    let mut pairs = Vec::new();
    let mut visited = HashSet::new();
    flatten_deep_object(var, &[], map, &mut visited, &mut pairs);

    if pairs.is_empty() {
        return None;
    }

    let rendered: Vec<String> = pairs
        .into_iter()
        .map(|(path, value)| {
            let mut key = var.name.clone();
            for segment in &path {
                key.push('[');
                key.push_str(&pct_encode(segment, var.allow));
                key.push(']');
            }
            format!("{}={}", key, pct_encode(&value, var.allow))
        })
        .collect();

    Some(rendered.join(&var.separator))
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------


fn flatten_deep_object(
    var: &Variable,
    path: &[String],
    map: &IndexMap<String, Value>,
    visited: &mut HashSet<usize>,
    out: &mut Vec<(Vec<String>, String)>,
) {
    let identity = map as *const _ as usize;
    if !visited.insert(identity) {
        return;
    }

    for (key, value) in map {
        let mut next_path = path.to_vec();
        next_path.push(key.clone());
        match value {
            Value::Map(nested) => flatten_deep_object(var, &next_path, nested, visited, out),
            Value::Null => {}
            _ => {
                if let Some(s) = coerce(var, value) {
                    out.push((next_path, prefix(&s, var.max_length)));
                }
            }
        }
    }
}
