/*!
The IPv6 address sub-parser, RFC 3986 §3.2.2.

The grammar permits zero or one `"::"` compressions and an optional trailing embedded IPv4
address. Rather than the rewind-on-failure approach a byte-oriented parser needs, this version
decides whether a group is a hextet or the start of an embedded IPv4 tail with a **bounded
lookahead** before consuming anything: it scans from the current offset to the next `:` (or the
end of the address) and checks whether that span contains a `.`, which a hex group never does.
That lookahead is the one "remembered position" the grammar needs; once the decision is made the
parser never backtracks.
*/

use crate::cursor::Cursor;
use crate::error::{bounds, syntax, Result};
use crate::parser::ipv4::parse_ipv4;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Parse an `IPv6address` (optionally with an embedded IPv4 tail) starting at the cursor's current
/// offset, advancing it to the cursor's current `limit` on success.
///
pub(crate) fn parse_ipv6(cur: &mut Cursor<'_>) -> Result<()> {
    let mut hextets = 0usize;
    let mut compressed = false;

    if cur.eat_str("::") {
        compressed = true;
        if cur.is_at_limit() {
            return Ok(());
        }
    } else if cur.peek() == Some(':') {
        return Err(syntax(
            "a single leading ':' is not allowed, use '::'",
            cur.input,
            cur.offset,
        ));
    }

    loop {
        if looks_like_ipv4_tail(cur) {
            parse_ipv4(cur)?;
            hextets += 2;
            break;
        }

        parse_hextet(cur)?;
        hextets += 1;

        if !cur.eat(':') {
            break;
        }
        if cur.eat(':') {
            if compressed {
                return Err(syntax(
                    "only one '::' compression is allowed in an IPv6 address",
                    cur.input,
                    cur.offset,
                ));
            }
            compressed = true;
            if cur.is_at_limit() {
                break;
            }
            continue;
        }
        if cur.is_at_limit() {
            return Err(syntax(
                "expected a hextet after ':'",
                cur.input,
                cur.offset,
            ));
        }
    }

    if !cur.is_at_limit() {
        return Err(syntax(
            "unexpected trailing characters in IPv6 address",
            cur.input,
            cur.offset,
        ));
    }

    let max_hextets = if compressed { 7 } else { 8 };
    if hextets > max_hextets {
        return Err(bounds(
            "too many groups in IPv6 address",
            cur.input,
            cur.offset,
        ));
    }
    if !compressed && hextets != 8 {
        return Err(bounds(
            "an IPv6 address without '::' must have exactly 8 groups",
            cur.input,
            cur.offset,
        ));
    }

    Ok(())
}

///
/// Standalone entry point: `true` iff `s` in its entirety is a valid IPv6 address.
///
pub fn is_valid_ipv6(s: &str) -> bool {
    let mut cur = Cursor::new(s, false);
    parse_ipv6(&mut cur).is_ok() && cur.is_at_limit()
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn parse_hextet(cur: &mut Cursor<'_>) -> Result<()> {
    let start = cur.offset;
    let mut count = 0;
    while count < 4 {
        match cur.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                cur.advance();
                count += 1;
            }
            _ => break,
        }
    }
    if count == 0 {
        return Err(syntax("expected 1-4 hex digits", cur.input, start));
    }
    if matches!(cur.peek(), Some(c) if c.is_ascii_hexdigit()) {
        return Err(bounds(
            "an IPv6 group may have at most 4 hex digits",
            cur.input,
            cur.offset,
        ));
    }
    Ok(())
}

/// `true` iff, without consuming anything, the characters up to the next `:` (or the address's
/// end) look like a dotted-quad rather than a hex group — i.e. they start with a decimal digit
/// and contain a `.` before the next `:`. Hex groups never contain `.`, so this is unambiguous.
fn looks_like_ipv4_tail(cur: &Cursor<'_>) -> bool {
    match cur.peek() {
        Some(c) if c.is_ascii_digit() => {
            let rest = cur.remaining();
            let bound = rest.find(':').unwrap_or(rest.len());
            rest[..bound].contains('.')
        }
        _ => false,
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
