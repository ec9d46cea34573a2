/*!
Formatting: the inverse of [`crate::template::parser`] — render a [`Template`]/[`Expression`]/
[`Variable`] back into its canonical string form.
*/

use crate::template::model::{Expression, Part, Template, Variable};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Render `template` back into a URI Template string.
pub fn format_uri_template(template: &Template) -> String {
    let mut out = String::new();
    for part in &template.parts {
        match part {
            Part::Literal(s) => out.push_str(s),
            Part::Expression(e) => {
                out.push('{');
                out.push_str(&format_uri_expression(e));
                out.push('}');
            }
        }
    }
    out
}

/// Render `expr` back into an expression body (without the surrounding `{`/`}`).
pub fn format_uri_expression(expr: &Expression) -> String {
    let mut out = String::new();
    if let Some(c) = expr.operator.as_char() {
        out.push(c);
    }
    let rendered: Vec<String> = expr.variables.iter().map(format_uri_variable).collect();
    out.push_str(&rendered.join(","));
    out
}

/// Render `var` back into a variable specifier, e.g. `"name"`, `"name*"`, `"name:4"`.
pub fn format_uri_variable(var: &Variable) -> String {
    let mut out = var.name.clone();
    if var.explode {
        out.push('*');
    } else if var.max_length > 0 {
        out.push(':');
        out.push_str(&var.max_length.to_string());
    }
    out
}

/// All [`Variable`]s a template references, in template order — the same traversal
/// [`Template::variables`](crate::template::model::Template::variables) performs, exposed here
/// under the name the external interface list uses.
pub fn get_uri_template_variables(template: &Template) -> Vec<&Variable> {
    template.variables()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
