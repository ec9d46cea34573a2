/*!
The static model for URI Templates, RFC 6570: a [`Template`] is an ordered sequence of [`Part`]s,
each either a literal string or an [`Expression`]; an `Expression` carries an [`Operator`] and a
non-empty list of [`Variable`] specifiers.
*/

use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

// ------------------------------------------------------------------------------------------------
// Public Types — bindings
// ------------------------------------------------------------------------------------------------

///
/// A dynamically-typed value bound to a template variable name. Unlike the teacher crate's typed
/// component records, bindings are genuinely heterogeneous at the call site (a caller hands in a
/// mix of strings, lists, and maps), so this is a small closed enum rather than a generic
/// parameter — the same pattern RFC 6570 implementations in dynamically-typed languages reach for
/// natively, realised here as a tagged variant.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The "absent" marker: a variable bound to `Null` is skipped silently during expansion.
    Null,
    Scalar(String),
    List(Vec<Value>),
    /// Insertion order matters for expansion (RFC 6570's examples depend on it), hence `IndexMap`
    /// rather than a `BTreeMap`/`HashMap`.
    Map(IndexMap<String, Value>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(b.to_string())
    }
}

macro_rules! impl_value_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Scalar(n.to_string())
                }
            }
        )*
    };
}

impl_value_from_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// A per-variable coercion hook: given a bound [`Value`], produce its string form, or `None` if
/// the value should be treated as absent. The default (used when a [`Variable`] carries none) is
/// "strings pass through; everything else JSON-serialises".
pub type CoerceFn = Rc<dyn Fn(&Value) -> Option<String>>;

// ------------------------------------------------------------------------------------------------
// Public Types — operators
// ------------------------------------------------------------------------------------------------

///
/// The RFC 6570 §2.2 operator set, tagging how an expression's variables are rendered. The unit
/// variant names follow the RFC's own terms for each operator rather than the bare punctuation, so
/// that `Operator::Fragment` reads the same as the `#` it lexes from.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator (`{var}`).
    Simple,
    /// `+` — reserved expansion.
    Reserved,
    /// `#` — fragment expansion.
    Fragment,
    /// `.` — label expansion with dot-prefix.
    Label,
    /// `/` — path segment expansion.
    PathSegment,
    /// `;` — path-style parameter expansion.
    PathParam,
    /// `?` — form-style query expansion.
    Query,
    /// `&` — form-style query continuation.
    QueryContinuation,
}

/// The five per-operator defaults named in RFC 6570's operator table, applied to every variable in
/// an expression that carries this operator.
pub(crate) struct OperatorDefaults {
    pub first: &'static str,
    pub sep: &'static str,
    pub named: bool,
    pub empty: &'static str,
    pub allow: crate::lex::CharClass,
}

impl Operator {
    /// The ASCII punctuation this operator lexes from, or `None` for [`Operator::Simple`].
    pub fn as_char(self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParam => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    /// Parse the punctuation that introduces an operator, or `None` if `c` does not start one (the
    /// caller then treats the expression as operator-less, i.e. [`Operator::Simple`]).
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParam),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    /// `true` iff `c` is one of the operators reserved for future extension by RFC 6570 §2.2
    /// (`= , ! @ |`), which this crate rejects rather than silently ignores.
    pub fn is_reserved_for_future_use(c: char) -> bool {
        matches!(c, '=' | ',' | '!' | '@' | '|')
    }

    pub(crate) fn defaults(self) -> OperatorDefaults {
        use crate::lex::CharClass;
        match self {
            Operator::Simple => OperatorDefaults {
                first: "",
                sep: ",",
                named: false,
                empty: "",
                allow: CharClass::Unreserved,
            },
            Operator::Reserved => OperatorDefaults {
                first: "",
                sep: ",",
                named: false,
                empty: "",
                allow: CharClass::Reserved,
            },
            Operator::Fragment => OperatorDefaults {
                first: "#",
                sep: ",",
                named: false,
                empty: "",
                allow: CharClass::Reserved,
            },
            Operator::Label => OperatorDefaults {
                first: ".",
                sep: ".",
                named: false,
                empty: "",
                allow: CharClass::Unreserved,
            },
            Operator::PathSegment => OperatorDefaults {
                first: "/",
                sep: "/",
                named: false,
                empty: "",
                allow: CharClass::Unreserved,
            },
            Operator::PathParam => OperatorDefaults {
                first: ";",
                sep: ";",
                named: true,
                empty: "",
                allow: CharClass::Unreserved,
            },
            Operator::Query => OperatorDefaults {
                first: "?",
                sep: "&",
                named: true,
                empty: "=",
                allow: CharClass::Unreserved,
            },
            Operator::QueryContinuation => OperatorDefaults {
                first: "&",
                sep: "&",
                named: true,
                empty: "=",
                allow: CharClass::Unreserved,
            },
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types — model
// ------------------------------------------------------------------------------------------------

///
/// A single variable specifier inside an expression: `varname`, optionally followed by `*`
/// (explode) or `:N` (maxLength).
///
#[derive(Clone)]
pub struct Variable {
    pub name: String,
    pub separator: String,
    pub composite_separator: String,
    pub named: bool,
    pub empty: String,
    pub allow: crate::lex::CharClass,
    /// `-1` means unlimited; otherwise `1..=9999`.
    pub max_length: i32,
    pub explode: bool,
    pub deep_object: bool,
    pub coerce: Option<CoerceFn>,
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("named", &self.named)
            .field("max_length", &self.max_length)
            .field("explode", &self.explode)
            .field("deep_object", &self.deep_object)
            .finish()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.separator == other.separator
            && self.composite_separator == other.composite_separator
            && self.named == other.named
            && self.empty == other.empty
            && self.allow == other.allow
            && self.max_length == other.max_length
            && self.explode == other.explode
            && self.deep_object == other.deep_object
    }
}

impl Variable {
    /// A variable named `name`, with every field set to the operator-less (`Simple`) defaults.
    pub fn new<S: Into<String>>(name: S) -> Self {
        let defaults = Operator::Simple.defaults();
        Variable {
            name: name.into(),
            separator: defaults.sep.to_string(),
            composite_separator: ",".to_string(),
            named: defaults.named,
            empty: defaults.empty.to_string(),
            allow: defaults.allow,
            max_length: -1,
            explode: false,
            deep_object: false,
            coerce: None,
        }
    }

    pub fn exploded(mut self) -> Self {
        self.explode = true;
        self
    }

    pub fn with_max_length(mut self, n: i32) -> Self {
        self.max_length = n;
        self
    }
}

///
/// A single expression, `{op var1,var2,...}`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub variables: Vec<Variable>,
    pub first: String,
    pub separator: String,
}

impl Expression {
    pub fn new(operator: Operator, variables: Vec<Variable>) -> Self {
        let defaults = operator.defaults();
        Expression {
            operator,
            variables,
            first: defaults.first.to_string(),
            separator: defaults.sep.to_string(),
        }
    }
}

///
/// One constituent of a [`Template`]: either a literal run of already-URI-safe characters, or an
/// expression to be expanded against bindings.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    Literal(String),
    Expression(Expression),
}

///
/// An ordered sequence of [`Part`]s — the parsed form of a URI Template string.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Template {
    pub parts: Vec<Part>,
}

impl Template {
    pub fn new(parts: Vec<Part>) -> Self {
        Template { parts }
    }

    /// All [`Variable`]s named across every [`Expression`] part, in template order.
    pub fn variables(&self) -> Vec<&Variable> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Expression(e) => Some(e),
                Part::Literal(_) => None,
            })
            .flat_map(|e| e.variables.iter())
            .collect()
    }
}
