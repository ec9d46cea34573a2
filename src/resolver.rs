/*!
Reference resolution against a base URI, RFC 3986 §5.

[`resolve_uri`] implements the "transform references" procedure of §5.2.2; [`remove_dot_segments`]
implements the character-stack algorithm of §5.2.4 that it (and `merge`) depend on.
[`resolve_uri_opt`]/[`resolve_opt`] admit an absent base, returning `reference` with its path
dot-segment-normalised rather than merged against anything.

# Example

```rust
use uriel::resolver::resolve_uri;

let resolved = resolve_uri("http://a/b/c/d;p?q", "../g").unwrap();
assert_eq!(resolved.href, "http://a/b/g");
```
*/

use crate::error::Result;
use crate::model::{format_uri, Uri};
use crate::parser::parse_uri_reference;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Resolve `reference` against `base`, both given as unparsed strings, per RFC 3986 §5.2.2.
///
pub fn resolve_uri(base: &str, reference: &str) -> Result<Uri> {
    let base = parse_uri_reference(base)?;
    let reference = parse_uri_reference(reference)?;
    Ok(resolve(&base, &reference))
}

///
/// As [`resolve_uri`], but `base` may be absent: with no base, `reference` is returned after
/// dot-segment removal on its path, with no further merging against anything.
///
pub fn resolve_uri_opt(base: Option<&str>, reference: &str) -> Result<Uri> {
    let reference = parse_uri_reference(reference)?;
    match base {
        Some(base) => {
            let base = parse_uri_reference(base)?;
            Ok(resolve(&base, &reference))
        }
        None => Ok(resolve_opt(None, &reference)),
    }
}

///
/// As [`resolve`], but `base` may be absent: with no base, `reference` is returned after
/// dot-segment removal on its path, per RFC 3986 §5.2.2 (a base is required by the algorithm;
/// absent a base, the reference is merely normalised in place).
///
pub fn resolve_opt(base: Option<&Uri>, reference: &Uri) -> Uri {
    match base {
        Some(base) => resolve(base, reference),
        None => {
            let mut target = reference.clone();
            target.path = remove_dot_segments(&reference.path);
            target.relative = {
                let mut rel = String::new();
                if let Some(authority) = &target.authority {
                    rel.push_str("//");
                    rel.push_str(authority);
                }
                rel.push_str(&target.path);
                rel
            };
            target.href = format_uri(&target);
            target
        }
    }
}

///
/// As [`resolve_uri`], operating on already-parsed component records.
///
pub fn resolve(base: &Uri, reference: &Uri) -> Uri {
    let mut target = if reference.scheme.is_some() {
        Uri {
            href: String::new(),
            scheme: reference.scheme.clone(),
            relative: String::new(),
            authority: reference.authority.clone(),
            userinfo: reference.userinfo.clone(),
            host: reference.host.clone(),
            hostname: reference.hostname.clone(),
            ipv4: reference.ipv4.clone(),
            ipv6: reference.ipv6.clone(),
            ipv_future: reference.ipv_future.clone(),
            port: reference.port.clone(),
            path: remove_dot_segments(&reference.path),
            query: reference.query.clone(),
            fragment: None,
        }
    } else if reference.authority.is_some() {
        Uri {
            href: String::new(),
            scheme: base.scheme.clone(),
            relative: String::new(),
            authority: reference.authority.clone(),
            userinfo: reference.userinfo.clone(),
            host: reference.host.clone(),
            hostname: reference.hostname.clone(),
            ipv4: reference.ipv4.clone(),
            ipv6: reference.ipv6.clone(),
            ipv_future: reference.ipv_future.clone(),
            port: reference.port.clone(),
            path: remove_dot_segments(&reference.path),
            query: reference.query.clone(),
            fragment: None,
        }
    } else if reference.path.is_empty() {
        Uri {
            href: String::new(),
            scheme: base.scheme.clone(),
            relative: String::new(),
            authority: base.authority.clone(),
            userinfo: base.userinfo.clone(),
            host: base.host.clone(),
            hostname: base.hostname.clone(),
            ipv4: base.ipv4.clone(),
            ipv6: base.ipv6.clone(),
            ipv_future: base.ipv_future.clone(),
            port: base.port.clone(),
            path: base.path.clone(),
            query: reference.query.clone().or_else(|| base.query.clone()),
            fragment: None,
        }
    } else {
        let path = if reference.path.starts_with('/') {
            remove_dot_segments(&reference.path)
        } else {
            remove_dot_segments(&merge(base, &reference.path))
        };
        Uri {
            href: String::new(),
            scheme: base.scheme.clone(),
            relative: String::new(),
            authority: base.authority.clone(),
            userinfo: base.userinfo.clone(),
            host: base.host.clone(),
            hostname: base.hostname.clone(),
            ipv4: base.ipv4.clone(),
            ipv6: base.ipv6.clone(),
            ipv_future: base.ipv_future.clone(),
            port: base.port.clone(),
            path,
            query: reference.query.clone(),
            fragment: None,
        }
    };

    target.fragment = reference.fragment.clone();
    target.relative = {
        let mut rel = String::new();
        if let Some(authority) = &target.authority {
            rel.push_str("//");
            rel.push_str(authority);
        }
        rel.push_str(&target.path);
        rel
    };
    target.href = format_uri(&target);
    target
}

///
/// `merge(base, refPath)`: `"/" + refPath` if `base` has an authority and an empty path;
/// otherwise `base.path` truncated at (and including) its rightmost `/`, with `refPath` appended,
/// or `refPath` alone if `base.path` has no `/`.
///
fn merge(base: &Uri, ref_path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", ref_path);
    }
    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], ref_path),
        None => ref_path.to_string(),
    }
}

///
/// The character-stack dot-segment removal algorithm of RFC 3986 §5.2.4.
///
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::new();

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("/./") {
            input = rest;
            output.push('/');
            // The leading '/' just pushed stands in for "/./" until the segment that follows
            // (taken on a later iteration) appends after it.
            continue;
        } else if input == "/." {
            output.push('/');
            input = "";
        } else if let Some(rest) = input.strip_prefix("/../") {
            pop_last_segment(&mut output);
            output.push('/');
            input = rest;
            continue;
        } else if input == "/.." {
            pop_last_segment(&mut output);
            output.push('/');
            input = "";
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let (segment, rest) = take_one_segment(input);
            output.push_str(segment);
            input = rest;
        }
    }

    output
}

/// Remove the last output segment, i.e. everything after (and including) its rightmost `/`.
fn pop_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

/// Move the first path segment from `input` to the output and return the rest: if `input` starts
/// with `/`, the segment includes that leading slash and runs up to (not including) the next
/// `/`; otherwise the segment runs from the start up to the next `/`.
fn take_one_segment(input: &str) -> (&str, &str) {
    if let Some(rest) = input.strip_prefix('/') {
        match rest.find('/') {
            Some(i) => input.split_at(i + 1),
            None => (input, ""),
        }
    } else {
        match input.find('/') {
            Some(i) => input.split_at(i),
            None => (input, ""),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
