/*!
The URI Template scanner: splits a template string into literal runs and `{...}` expressions, then
parses each expression body into an [`Expression`](crate::template::model::Expression).
*/

use crate::cursor::Cursor;
use crate::lex::{is_pct_encoded, is_reserved_char, is_ucs_char, is_unreserved, pct_encode_code_point};
use crate::template::error::{Result, UriTemplateError};
use crate::template::model::{Expression, Operator, Template, Variable};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parse `input` as a whole URI Template.
pub fn parse_uri_template(input: &str) -> Result<Template> {
    let mut cur = Cursor::new(input, true);
    let mut parts = Vec::new();
    let mut literal = String::new();

    while let Some(c) = cur.peek() {
        if c == '{' {
            if !literal.is_empty() {
                parts.push(crate::template::model::Part::Literal(std::mem::take(
                    &mut literal,
                )));
            }
            parts.push(crate::template::model::Part::Expression(parse_expression_at(
                &mut cur,
            )?));
        } else if c == '%' {
            let start = cur.offset;
            if !is_pct_encoded(cur.input.as_bytes(), start) {
                return Err(UriTemplateError::new(
                    "invalid percent-encoding",
                    cur.input,
                    start,
                ));
            }
            literal.push_str(&cur.input[start..start + 3]);
            cur.offset += 3;
        } else if is_unreserved(c) || is_reserved_char(c) {
            literal.push(c);
            cur.advance();
        } else if is_template_literal_char(c) {
            literal.push_str(&pct_encode_code_point(c));
            cur.advance();
        } else {
            return Err(UriTemplateError::new(
                "unexpected character in template literal",
                cur.input,
                cur.offset,
            ));
        }
    }

    if !literal.is_empty() {
        parts.push(crate::template::model::Part::Literal(literal));
    }

    Ok(Template::new(parts))
}

/// As [`parse_uri_template`], but returns `None` instead of propagating a structured error.
pub fn try_parse_uri_template(input: &str) -> Option<Template> {
    parse_uri_template(input).ok()
}

/// Parse the body of a single expression, e.g. `"op var1,var2*"` — without the surrounding `{`/`}`.
pub fn parse_uri_expression(input: &str) -> Result<Expression> {
    let mut cur = Cursor::new(input, true);
    parse_expression_body(&mut cur)
}

/// As [`parse_uri_expression`], but returns `None` instead of propagating a structured error.
pub fn try_parse_uri_expression(input: &str) -> Option<Expression> {
    parse_uri_expression(input).ok()
}

/// Parse a single variable specifier, e.g. `"name*"` or `"name:4"`.
pub fn parse_uri_variable(input: &str) -> Result<Variable> {
    let mut cur = Cursor::new(input, true);
    let var = parse_variable_spec(&mut cur, &Operator::Simple.defaults())?;
    if !cur.is_at_limit() {
        return Err(UriTemplateError::new(
            "unexpected trailing input in variable",
            cur.input,
            cur.offset,
        ));
    }
    Ok(var)
}

/// As [`parse_uri_variable`], but returns `None` instead of propagating a structured error.
pub fn try_parse_uri_variable(input: &str) -> Option<Variable> {
    parse_uri_variable(input).ok()
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// RFC 6570's `literals` production, minus the characters already accepted verbatim by the
/// unreserved/reserved/pct-encoded branches above: `%x21 / %x23-24 / %x26 / %x28-3B / %x3D /
/// %x3F-5B / %x5D / %x5F / %x61-7A / %x7E / ucschar / iprivate`.
fn is_template_literal_char(c: char) -> bool {
    matches!(c as u32, 0x21 | 0x23..=0x24 | 0x26 | 0x28..=0x3B | 0x3D | 0x3F..=0x5B | 0x5D | 0x5F | 0x61..=0x7A | 0x7E)
        || is_ucs_char(c)
        || crate::lex::is_iprivate_char(c)
}

fn parse_expression_at(cur: &mut Cursor<'_>) -> Result<Expression> {
    let brace_start = cur.offset;
    cur.advance(); // '{'
    let body_start = cur.offset;
    let close = cur
        .input
        .get(body_start..)
        .and_then(|s| s.find('}'))
        .map(|i| body_start + i)
        .ok_or_else(|| UriTemplateError::new("unclosed expression, expected '}'", cur.input, brace_start))?;

    let prev_limit = cur.push_limit(close);
    let expr = parse_expression_body(cur)?;
    if !cur.is_at_limit() {
        return Err(UriTemplateError::new(
            "unexpected characters in expression",
            cur.input,
            cur.offset,
        ));
    }
    cur.pop_limit(prev_limit);
    cur.eat('}');
    Ok(expr)
}

fn parse_expression_body(cur: &mut Cursor<'_>) -> Result<Expression> {
    if cur.is_at_limit() {
        return Err(UriTemplateError::new("empty expression", cur.input, cur.offset));
    }

    let operator = match cur.peek() {
        Some(c) if Operator::is_reserved_for_future_use(c) => {
            return Err(UriTemplateError::new(
                format!("operator '{}' is reserved for future extension", c),
                cur.input,
                cur.offset,
            ));
        }
        Some(c) => match Operator::from_char(c) {
            Some(op) => {
                cur.advance();
                op
            }
            None => Operator::Simple,
        },
        None => Operator::Simple,
    };

    let defaults = operator.defaults();
    let mut variables = Vec::new();
    loop {
        variables.push(parse_variable_spec(cur, &defaults)?);
        if !cur.eat(',') {
            break;
        }
    }

    if variables.is_empty() {
        return Err(UriTemplateError::new("expected a variable list", cur.input, cur.offset));
    }

    Ok(Expression::new(operator, variables))
}

fn parse_variable_spec(
    cur: &mut Cursor<'_>,
    defaults: &crate::template::model::OperatorDefaults,
) -> Result<Variable> {
    let start = cur.offset;
    let mut seen_varchar = false;
    loop {
        match cur.peek() {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                cur.advance();
                seen_varchar = true;
            }
            Some('%') => {
                if !is_pct_encoded(cur.input.as_bytes(), cur.offset) {
                    return Err(UriTemplateError::new("invalid percent-encoding in variable name", cur.input, cur.offset));
                }
                cur.offset += 3;
                seen_varchar = true;
            }
            Some('.') => {
                // `varchar *( ["."] varchar )`: a dot may only separate two varchar runs, so it
                // is rejected both leading (nothing seen yet) and trailing/doubled (not followed
                // by a varchar).
                if !seen_varchar {
                    return Err(UriTemplateError::new(
                        "a variable name cannot begin with '.'",
                        cur.input,
                        cur.offset,
                    ));
                }
                let follows_varchar = match cur.peek_at(1) {
                    Some(c) => c.is_ascii_alphanumeric() || c == '_' || (c == '%' && is_pct_encoded(cur.input.as_bytes(), cur.offset + 1)),
                    None => false,
                };
                if !follows_varchar {
                    return Err(UriTemplateError::new(
                        "'.' in a variable name must separate two varchar runs",
                        cur.input,
                        cur.offset,
                    ));
                }
                cur.advance();
                seen_varchar = false;
            }
            _ => break,
        }
    }
    let name = cur.input[start..cur.offset].to_string();
    if name.is_empty() {
        return Err(UriTemplateError::new("expected a variable name", cur.input, start));
    }

    let mut explode = false;
    let mut max_length: i32 = -1;

    match cur.peek() {
        Some('*') => {
            cur.advance();
            explode = true;
        }
        Some(':') => {
            cur.advance();
            let digits_start = cur.offset;
            match cur.peek() {
                Some(c) if ('1'..='9').contains(&c) => {
                    cur.advance();
                }
                _ => {
                    return Err(UriTemplateError::new(
                        "maxLength must begin with a digit 1-9",
                        cur.input,
                        cur.offset,
                    ));
                }
            }
            while matches!(cur.peek(), Some(c) if c.is_ascii_digit()) && cur.offset - digits_start < 4 {
                cur.advance();
            }
            let digits = &cur.input[digits_start..cur.offset];
            max_length = digits
                .parse()
                .map_err(|_| UriTemplateError::new("invalid maxLength", cur.input, digits_start))?;
        }
        _ => {}
    }

    Ok(Variable {
        name,
        separator: defaults.sep.to_string(),
        composite_separator: ",".to_string(),
        named: defaults.named,
        empty: defaults.empty.to_string(),
        allow: defaults.allow,
        max_length,
        explode,
        deep_object: false,
        coerce: None,
    })
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
