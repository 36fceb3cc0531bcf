//! Percent encoding and lenient percent decoding.

use core::fmt::{self, Write as _};

use alloc::string::String;
use alloc::vec::Vec;

/// A proxy to percent-encode a string as a query component.
///
/// Characters outside the unescaped set (ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`) are written as UTF-8 percent triplets. A space becomes
/// `%20`, never `+`.
///
/// # Examples
///
/// ```
/// use uri_parts::percent::PercentEncoded;
///
/// assert_eq!(
///     PercentEncoded::from_query_component("a b&c=d").to_string(),
///     "a%20b%26c%3Dd"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates an encoded string from a raw query key or value.
    #[inline]
    #[must_use]
    pub fn from_query_component(raw: T) -> Self {
        Self { raw }
    }
}

/// Returns true if the character needs no escaping in a query component.
#[inline]
#[must_use]
fn is_unescaped(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if is_unescaped(c) {
                    self.writer.write_char(c)
                } else {
                    let mut buf = [0_u8; 4];
                    let buf = c.encode_utf8(&mut buf);
                    buf.bytes().try_for_each(|b| write!(self.writer, "%{:02X}", b))
                }
            }
        }
        let mut filter = Filter { writer: f };
        write!(filter, "{}", self.raw)
    }
}

/// Returns the decoded byte of a `%XX` triplet at the head of the string.
#[must_use]
fn take_triplet(s: &str) -> Option<u8> {
    /// Returns the value of an ASCII hex digit.
    fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'%' {
        return None;
    }
    Some(hex_val(bytes[1])? << 4 | hex_val(bytes[2])?)
}

/// Percent-decodes the string leniently.
///
/// Runs of `%XX` triplets are decoded together so multi-byte UTF-8 sequences
/// survive. A `%` that does not start a valid triplet passes through, and a
/// run whose bytes are not valid UTF-8 is kept verbatim from the point the
/// bytes stop being valid.
#[must_use]
pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let mut bytes = Vec::new();
        while let Some(b) = take_triplet(&rest[(bytes.len() * 3)..]) {
            bytes.push(b);
        }
        if bytes.is_empty() {
            out.push('%');
            rest = &rest[1..];
            continue;
        }
        let run_len = bytes.len() * 3;
        match core::str::from_utf8(&bytes) {
            Ok(s) => out.push_str(s),
            Err(e) => {
                let valid = e.valid_up_to();
                out.push_str(
                    core::str::from_utf8(&bytes[..valid])
                        .expect("[validity] bytes up to `valid_up_to` must be valid UTF-8"),
                );
                out.push_str(&rest[(valid * 3)..run_len]);
            }
        }
        rest = &rest[run_len..];
    }
    out.push_str(rest);
    out
}

/// Percent-decodes a raw query key or value.
///
/// Every `+` decodes to a space before percent decoding, so a literal plus
/// must arrive as `%2B`.
#[must_use]
pub fn decode_query_component(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}
