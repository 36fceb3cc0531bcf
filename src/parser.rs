//! Decomposition of a raw URI string into its top-level components.
//!
//! Parsing is lenient by contract: any input, including the empty string,
//! decomposes into some combination of absent/present components. No input is
//! ever rejected.

pub(crate) mod str;

use crate::parser::str::{
    find_enclosed, find_split2, find_split3, find_split4_hole, find_split_hole, rfind_split_hole,
};

/// Raw top-level components of a URI string.
///
/// Every field borrows the input string; no decoding has happened yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    /// Scheme name, without the trailing colon.
    pub(crate) scheme: Option<&'a str>,
    /// Authority between `//` and the next `/`, `?`, or `#`.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path up to the first `?` or `#`.
    pub(crate) path: &'a str,
    /// Query without the leading `?`.
    pub(crate) query: Option<&'a str>,
    /// Fragment without the leading `#`.
    pub(crate) fragment: Option<&'a str>,
    /// Verbatim text between `{?` and `}` anywhere in the input.
    pub(crate) template_query: Option<&'a str>,
}

/// Raw sub-components of an authority string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    /// User-info before the first `@`.
    pub(crate) user: Option<&'a str>,
    /// Hostname.
    pub(crate) host: Option<&'a str>,
    /// Port digits after the last `:`.
    pub(crate) port: Option<&'a str>,
}

/// Returns true if the string is a valid scheme token (`[a-z][a-z0-9+.-]*`).
#[must_use]
pub(crate) fn is_scheme_token(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes
        .next()
        .map_or(false, |b| b.is_ascii_lowercase())
        && bytes.all(|b| {
            b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'+' | b'.' | b'-')
        })
}

/// Eats a scheme and a following colon if available, and returns the rest and the scheme.
///
/// A colon only counts as a scheme separator when the text before it is a
/// valid scheme token.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) if is_scheme_token(scheme) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character won't appear in the authority.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query or fragment, and returns that part.
#[must_use]
fn until_query_or_fragment(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((path, rest)) => (rest, path),
        None => ("", i),
    }
}

/// Decomposes the query and fragment, if available.
///
/// The string must start with `?` or `#`, or be empty. Both component orders
/// are accepted (`?query#fragment` and `#fragment?query`), so a string in the
/// canonical serialized order parses back to the same components. A stored
/// fragment never contains `?`: in the `?`-first order the fragment is
/// truncated at the first `?`, since a query has already been captured.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => {
                    let fragment =
                        find_split_hole(fragment, b'?').map_or(fragment, |(before, _)| before);
                    (Some(query), Some(fragment))
                }
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            let rest = &i[1..];
            match find_split_hole(rest, b'?') {
                Some((fragment, query)) => (Some(query), Some(fragment)),
                None => (None, Some(rest)),
            }
        }
    }
}

/// Decomposes the given URI string into its raw top-level components.
///
/// The `{?...}` template placeholder is extracted from the original full
/// string, independently of where the main decomposition put its text.
#[must_use]
pub(crate) fn decompose(i: &str) -> RawComponents<'_> {
    let template_query = find_enclosed(i, [b'{', b'?'], b'}');
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (i, path) = until_query_or_fragment(i);
    let (query, fragment) = decompose_query_and_fragment(i);
    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
        template_query,
    }
}

/// Decomposes an authority string into user-info, host, and port.
///
/// The user-info is everything before the first `@`. The port is a trailing
/// run of one or more digits after a `:`; a non-numeric colon suffix is kept
/// as part of the host. Empty parts come out as `None`.
#[must_use]
pub(crate) fn decompose_authority(i: &str) -> RawAuthority<'_> {
    let (user, rest) = match find_split_hole(i, b'@') {
        Some((user, rest)) => (Some(user), rest),
        None => (None, i),
    };
    let (host, port) = match rfind_split_hole(rest, b':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            (host, Some(port))
        }
        _ => (rest, None),
    };
    RawAuthority {
        user: user.filter(|s| !s.is_empty()),
        host: if host.is_empty() { None } else { Some(host) },
        port,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_uri() {
        let c = decompose("https://user@example.com:8080/a/b?k=v#frag");
        assert_eq!(c.scheme, Some("https"));
        assert_eq!(c.authority, Some("user@example.com:8080"));
        assert_eq!(c.path, "/a/b");
        assert_eq!(c.query, Some("k=v"));
        assert_eq!(c.fragment, Some("frag"));
        assert_eq!(c.template_query, None);
    }

    #[test]
    fn empty_input() {
        let c = decompose("");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, None);
        assert_eq!(c.path, "");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, None);
        assert_eq!(c.template_query, None);
    }

    #[test]
    fn absolute_slashes() {
        let c0 = decompose("scheme:");
        assert_eq!(c0.authority, None);
        assert_eq!(c0.path, "");

        let c1 = decompose("scheme:/");
        assert_eq!(c1.authority, None);
        assert_eq!(c1.path, "/");

        let c2 = decompose("scheme://");
        assert_eq!(c2.authority, Some(""));
        assert_eq!(c2.path, "");

        let c3 = decompose("scheme:///");
        assert_eq!(c3.authority, Some(""));
        assert_eq!(c3.path, "/");
    }

    #[test]
    fn relative_slashes() {
        let c0 = decompose("/");
        assert_eq!(c0.scheme, None);
        assert_eq!(c0.authority, None);
        assert_eq!(c0.path, "/");

        let c1 = decompose("//");
        assert_eq!(c1.authority, Some(""));
        assert_eq!(c1.path, "");

        let c2 = decompose("///");
        assert_eq!(c2.authority, Some(""));
        assert_eq!(c2.path, "/");
    }

    #[test]
    fn scheme_requires_lowercase_token() {
        assert_eq!(decompose("HTTP://x").scheme, None);
        assert_eq!(decompose("h2+ws-x.y://x").scheme, Some("h2+ws-x.y"));
        assert_eq!(decompose("1http://x").scheme, None);
    }

    #[test]
    fn colon_after_slash_is_not_a_scheme() {
        let c = decompose("a/b:c");
        assert_eq!(c.scheme, None);
        assert_eq!(c.path, "a/b:c");
    }

    #[test]
    fn fragment_before_query() {
        let c = decompose("https://h/p#frag?k=v");
        assert_eq!(c.path, "/p");
        assert_eq!(c.fragment, Some("frag"));
        assert_eq!(c.query, Some("k=v"));
    }

    #[test]
    fn query_before_fragment() {
        let c = decompose("https://h/p?k=v#frag");
        assert_eq!(c.query, Some("k=v"));
        assert_eq!(c.fragment, Some("frag"));
    }

    #[test]
    fn fragment_never_keeps_a_question_mark() {
        let c = decompose("https://h/p?a=1#b?c");
        assert_eq!(c.query, Some("a=1"));
        assert_eq!(c.fragment, Some("b"));

        let c = decompose("https://h/p#b?c");
        assert_eq!(c.query, Some("c"));
        assert_eq!(c.fragment, Some("b"));
    }

    #[test]
    fn template_placeholder() {
        let c = decompose("https://h/p{?a,b,c}");
        assert_eq!(c.template_query, Some("a,b,c"));
        // The main decomposition still sees `?` as the query separator.
        assert_eq!(c.path, "/p{");
        assert_eq!(c.query, Some("a,b,c}"));
    }

    #[test]
    fn authority_parts() {
        let a = decompose_authority("user:pass@example.com:8080");
        assert_eq!(a.user, Some("user:pass"));
        assert_eq!(a.host, Some("example.com"));
        assert_eq!(a.port, Some("8080"));
    }

    #[test]
    fn authority_plain_host() {
        let a = decompose_authority("example.com");
        assert_eq!(a.user, None);
        assert_eq!(a.host, Some("example.com"));
        assert_eq!(a.port, None);
    }

    #[test]
    fn authority_non_numeric_colon_suffix_is_host() {
        let a = decompose_authority("[2001:db8::1]");
        assert_eq!(a.host, Some("[2001:db8::1]"));
        assert_eq!(a.port, None);

        let a = decompose_authority("[::1]:8080");
        assert_eq!(a.host, Some("[::1]"));
        assert_eq!(a.port, Some("8080"));
    }

    #[test]
    fn authority_port_only() {
        let a = decompose_authority(":8080");
        assert_eq!(a.user, None);
        assert_eq!(a.host, None);
        assert_eq!(a.port, Some("8080"));
    }
}
