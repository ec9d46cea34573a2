/*!
RFC 6570 URI Templates (Level 4, plus the non-standard deep-object extension): parsing,
formatting, and expansion against variable bindings.

# Example

```rust
use uriel::template::{expand_uri_template, Value};
use indexmap::IndexMap;

let mut bindings = IndexMap::new();
bindings.insert("id".to_string(), Value::from("42"));
let result = expand_uri_template("/widgets/{id}", &bindings).unwrap();
assert_eq!(result, "/widgets/42");
```
*/

pub mod error;
pub mod expand;
pub mod format;
pub mod model;
pub mod parser;

pub use error::{Result, UriTemplateError};
pub use expand::{expand_uri_expression, expand_uri_template, expand_uri_variable, Bindings};
pub use format::{format_uri_expression, format_uri_template, format_uri_variable, get_uri_template_variables};
pub use model::{CoerceFn, Expression, Operator, Part, Template, Value, Variable};
pub use parser::{
    parse_uri_expression, parse_uri_template, parse_uri_variable, try_parse_uri_expression,
    try_parse_uri_template, try_parse_uri_variable,
};

/// Build a [`Template`] from already-constructed parts, matching the external interface's
/// `createUriTemplate(parts)`.
pub fn create_uri_template(parts: Vec<Part>) -> Template {
    Template::new(parts)
}

/// Build an [`Expression`] from an operator and variable list, matching the external interface's
/// `createUriExpression(op, vars, opts?)`. Per-expression `first`/`separator` overrides beyond the
/// operator's defaults can be set on the returned value directly.
pub fn create_uri_expression(operator: Operator, variables: Vec<Variable>) -> Expression {
    Expression::new(operator, variables)
}

/// Build a [`Variable`] named `name` with operator-less defaults, matching the external
/// interface's `createUriVariable(name, opts?)`.
pub fn create_uri_variable<S: Into<String>>(name: S) -> Variable {
    Variable::new(name)
}
