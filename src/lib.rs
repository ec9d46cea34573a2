/*!
A hand-written recursive-descent parser, reference resolver, and template expander for RFC 3986
URIs, RFC 3987 IRIs, and RFC 6570 URI Templates.

# Examples

Parsing and resolving:

```rust
use uriel::parser::parse_uri;
use uriel::resolver::resolve_uri;

let uri = parse_uri("https://john.doe@www.example.com:123/forum?tag=networking#top").unwrap();
assert_eq!(uri.scheme.as_deref(), Some("https"));
assert_eq!(uri.hostname.as_deref(), Some("www.example.com"));

let resolved = resolve_uri("http://a/b/c/d;p?q", "../g").unwrap();
assert_eq!(resolved.href, "http://a/b/g");
```

Expanding a URI Template:

```rust
use uriel::template::{expand_uri_template, Value};
use indexmap::IndexMap;

let mut bindings = IndexMap::new();
bindings.insert("term".to_string(), Value::from("search term"));
let expanded = expand_uri_template("/search{?term}", &bindings).unwrap();
assert_eq!(expanded, "/search?term=search%20term");
```
*/

#![warn(
    unknown_lints,
    // ---------- Stylistic
    absolute_paths_not_starting_with_crate,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    nonstandard_style, /* group */
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    // ---------- Future
    future_incompatible, /* group */
    rust_2021_compatibility, /* group */
    // ---------- Public
    missing_debug_implementations,
    // missing_docs,
    unreachable_pub,
    // ---------- Unsafe
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    // ---------- Unused
    unused, /* group */
)]
#![deny(
    // ---------- Public
    exported_private_dependencies,
    // ---------- Deprecated
    anonymous_parameters,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    // ---------- Unsafe
    deref_nullptr,
    drop_bounds,
    dyn_drop,
)]

pub mod cursor;
pub mod error;
pub mod lex;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod template;

pub use error::{Error, ErrorKind, Result as UriResult};
pub use model::{format_uri, is_absolute_uri, is_relative_uri, Uri};
pub use parser::{
    is_valid_iri, is_valid_iri_reference, is_valid_uri, is_valid_uri_reference, parse_iri,
    parse_iri_reference, parse_uri, parse_uri_reference, try_parse_iri, try_parse_iri_reference,
    try_parse_uri, try_parse_uri_reference,
};
pub use resolver::{remove_dot_segments, resolve_opt, resolve_uri, resolve_uri_opt};
