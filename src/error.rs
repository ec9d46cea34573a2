/*!
Error types returned while parsing, resolving, or formatting a URI or IRI.

All parse failures are reported through a single [`Error`] (aliased here as [`UriError`])
built with the `error_chain` crate, mirroring the way the rest of this crate's lineage
(the `rdftk_*` family) reports errors. Every kind carries the three fields a caller needs
to reconstruct "what went wrong, in what string, at what byte": `message`, `input`, and
`offset`.

*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Identifies which grammar component a [`Error`] was raised while parsing.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    Authority,
    UserInfo,
    Host,
    Port,
    Path,
    Query,
    Fragment,
    Template,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Component::Scheme => "scheme",
            Component::Authority => "authority",
            Component::UserInfo => "userinfo",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
            Component::Template => "template",
        };
        write!(f, "{}", s)
    }
}

error_chain::error_chain! {
    errors {
        ///
        /// An unexpected or missing character was found at `offset`; `message` names the
        /// production that failed (e.g. "scheme must start with a letter").
        ///
        Syntax(message: String, input: String, offset: usize) {
            description("a syntax error was encountered while parsing")
            display("{} (at byte offset {} in `{}`)", message, offset, input)
        }
        ///
        /// A numeric value fell outside its permitted range (port, IPv4 octet, template
        /// `maxLength`).
        ///
        Bounds(message: String, input: String, offset: usize) {
            description("a value was outside its permitted bounds")
            display("{} (at byte offset {} in `{}`)", message, offset, input)
        }
        ///
        /// A percent-encoded triplet was malformed (`%` not followed by two hex digits).
        ///
        Encoding(message: String, input: String, offset: usize) {
            description("a percent-encoding error was encountered while parsing")
            display("{} (at byte offset {} in `{}`)", message, offset, input)
        }
    }
}

impl ErrorKind {
    /// The human-readable description of what went wrong.
    pub fn message(&self) -> &str {
        match self {
            ErrorKind::Syntax(m, _, _) => m,
            ErrorKind::Bounds(m, _, _) => m,
            ErrorKind::Encoding(m, _, _) => m,
            _ => "an unknown error occurred",
        }
    }

    /// The full input string being parsed when the error occurred.
    pub fn input(&self) -> &str {
        match self {
            ErrorKind::Syntax(_, i, _) => i,
            ErrorKind::Bounds(_, i, _) => i,
            ErrorKind::Encoding(_, i, _) => i,
            _ => "",
        }
    }

    /// The byte offset into [`Self::input`] at which parsing stopped.
    pub fn offset(&self) -> usize {
        match self {
            ErrorKind::Syntax(_, _, o) => *o,
            ErrorKind::Bounds(_, _, o) => *o,
            ErrorKind::Encoding(_, _, o) => *o,
            _ => 0,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

pub(crate) fn syntax<S: Into<String>>(message: S, input: &str, offset: usize) -> Error {
    ErrorKind::Syntax(message.into(), input.to_string(), offset).into()
}

pub(crate) fn bounds<S: Into<String>>(message: S, input: &str, offset: usize) -> Error {
    ErrorKind::Bounds(message.into(), input.to_string(), offset).into()
}

pub(crate) fn encoding<S: Into<String>>(message: S, input: &str, offset: usize) -> Error {
    ErrorKind::Encoding(message.into(), input.to_string(), offset).into()
}
