/*!
The mutable scan cursor shared by every sub-parser in [`crate::parser`].

A `Cursor` holds the original input, a read position (`offset`), a temporary scan boundary
(`limit`, initially `input.len()`), and the `iri` mode flag. `limit` is narrowed, not sliced: this
lets the IPv6/IPvFuture sub-parser scan only up to a matching `]`, and the template expression
parser scan only up to a matching `}`, while reusing the exact same predicate machinery and error
offsets as the rest of the parse — no substring is ever allocated just to bound a sub-scan.
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A byte-offset cursor over a `&str`, bounded by a narrowable `limit` and tagged with whether the
/// surrounding parse is in IRI mode.
///
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    pub input: &'a str,
    pub offset: usize,
    pub limit: usize,
    pub iri: bool,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, iri: bool) -> Self {
        Self {
            input,
            offset: 0,
            limit: input.len(),
            iri,
        }
    }

    /// `true` iff the cursor has reached its current limit.
    pub fn is_at_limit(&self) -> bool {
        self.offset >= self.limit
    }

    /// The remaining, unconsumed slice up to the current limit.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..self.limit]
    }

    /// Peek the scalar value at the current offset without consuming it, or `None` at the limit.
    pub fn peek(&self) -> Option<char> {
        if self.is_at_limit() {
            None
        } else {
            self.input[self.offset..self.limit].chars().next()
        }
    }

    /// Peek the scalar value `n` characters ahead of the current offset, or `None` past the limit.
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.offset..self.limit].chars().nth(n)
    }

    /// Consume and return the scalar value at the current offset, or `None` at the limit.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next, returning `true` on success.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.offset += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the literal `s` if it is next (byte-for-byte), returning `true` on success.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.remaining().starts_with(s) {
            self.offset += s.len();
            true
        } else {
            false
        }
    }

    /// Narrow the limit to `new_limit` (an absolute offset, not a length), returning the previous
    /// limit so the caller can restore it once the sub-scan completes.
    pub fn push_limit(&mut self, new_limit: usize) -> usize {
        let prev = self.limit;
        self.limit = new_limit;
        prev
    }

    pub fn pop_limit(&mut self, prev_limit: usize) {
        self.limit = prev_limit;
    }

    /// Scan forward from the current offset (ignoring the current limit) for the byte offset of
    /// the first occurrence of `needle`, or `None` if absent before the end of input.
    pub fn find_from_offset(&self, needle: char) -> Option<usize> {
        self.input[self.offset..].find(needle).map(|i| self.offset + i)
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let mut cur = Cursor::new("abc", false);
        assert_eq!(cur.peek(), Some('a'));
        assert_eq!(cur.peek_at(1), Some('b'));
        assert_eq!(cur.advance(), Some('a'));
        assert_eq!(cur.offset, 1);
        assert!(!cur.is_at_limit());
        cur.advance();
        cur.advance();
        assert!(cur.is_at_limit());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn test_eat_and_eat_str() {
        let mut cur = Cursor::new("http://x", false);
        assert!(!cur.eat('x'));
        assert!(cur.eat_str("http"));
        assert_eq!(cur.offset, 4);
        assert!(cur.eat(':'));
        assert!(cur.eat_str("//"));
        assert_eq!(cur.remaining(), "x");
    }

    #[test]
    fn test_push_pop_limit_bounds_remaining() {
        let mut cur = Cursor::new("[::1]/path", false);
        cur.advance(); // '['
        let close = cur.find_from_offset(']').unwrap();
        let prev = cur.push_limit(close);
        assert_eq!(cur.remaining(), "::1");
        assert!(!cur.is_at_limit());
        while cur.advance().is_some() {}
        assert!(cur.is_at_limit());
        cur.pop_limit(prev);
        assert!(!cur.is_at_limit());
        assert_eq!(cur.remaining(), "]/path");
    }

    #[test]
    fn test_peek_respects_multibyte_chars() {
        let mut cur = Cursor::new("é1", false);
        assert_eq!(cur.peek(), Some('é'));
        assert_eq!(cur.advance(), Some('é'));
        assert_eq!(cur.offset, 'é'.len_utf8());
        assert_eq!(cur.peek(), Some('1'));
    }
}
