//! Authority component views.
//!
//! The authority is a composite of user-info, host, and port. Its setter
//! writes through the same model fields the [`Host`][`super::Host`] and
//! [`Port`][`super::Port`] views read, and every setter that touches those
//! fields refreshes the cached `user@host:port` composition.

use core::fmt;

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::model::UriModel;
use crate::parser;
use crate::uri::Uri;
use crate::userinfo;

/// Read view of the authority component.
///
/// `get()` returns the cached composition with the user-info in decoded form;
/// `Display` renders the wire form with the user-info re-encoded.
#[derive(Debug, Clone, Copy)]
pub struct Authority<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Authority<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the cached `user@host:port` composition in decoded form.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.model.authority.as_deref()
    }

    /// Returns the user-info in decoded form.
    #[inline]
    #[must_use]
    pub fn user(&self) -> Option<&'a str> {
        self.model.user.as_deref()
    }

    /// Returns the hostname.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&'a str> {
        self.model.host.as_deref()
    }

    /// Returns the port digits.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        self.model.port.as_deref()
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.model.user {
            write!(f, "{}@", userinfo::encode(user))?;
        }
        if let Some(host) = &self.model.host {
            f.write_str(host)?;
        }
        if let Some(port) = &self.model.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Decodes a wire-form user-info token, passing it through on failure.
///
/// A token containing `:` is `user:pass` text, not an encoded token, and is
/// kept as is.
#[must_use]
pub(crate) fn decode_user(token: &str) -> String {
    if token.contains(':') {
        return token.to_owned();
    }
    userinfo::decode(token).unwrap_or_else(|_| token.to_owned())
}

/// Returns true if the string already looks like a composed
/// `user:pass@host` authority.
#[must_use]
fn looks_composed(s: &str) -> bool {
    match s.rfind('@') {
        Some(at) if at > 0 && at + 1 < s.len() => {
            let userinfo = &s[..at];
            userinfo
                .find(':')
                .map_or(false, |colon| colon > 0 && colon + 1 < userinfo.len())
        }
        _ => false,
    }
}

/// Mutating view of the authority component.
#[derive(Debug)]
pub struct AuthorityMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> AuthorityMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the authority.
    ///
    /// Three shapes are recognized:
    ///
    /// * a value equal to the current host is a no-op;
    /// * a composed `user:pass@host` value is stored verbatim, with host and
    ///   port refreshed from its right-hand side;
    /// * anything else treats the text left of `@` (or the whole string) as a
    ///   reversibly-encoded user-info token, decoded on success and kept raw
    ///   on failure, then recombined with the model's existing host and port.
    pub fn set(self, value: &str) -> &'a mut Uri {
        let model = &mut self.uri.model;
        if Some(value) == model.host.as_deref() {
            return self.uri;
        }
        if looks_composed(value) {
            let parts = parser::decompose_authority(value);
            model.user = parts.user.map(ToOwned::to_owned);
            model.host = parts.host.map(ToOwned::to_owned);
            model.port = parts.port.map(ToOwned::to_owned);
            model.authority = Some(value.to_owned());
        } else {
            let token = value.split_once('@').map_or(value, |(user, _)| user);
            model.user = if token.is_empty() {
                None
            } else {
                Some(decode_user(token))
            };
            model.refresh_authority();
        }
        self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    #[test]
    fn set_composed_refreshes_host_and_port() {
        let mut uri = Uri::parse("https://example.com/a");
        uri.authority_mut().set("alice:pw@example.net:81");
        assert_eq!(uri.authority().get(), Some("alice:pw@example.net:81"));
        assert_eq!(uri.authority().user(), Some("alice:pw"));
        assert_eq!(uri.host().get(), Some("example.net"));
        assert_eq!(uri.port().get(), Some("81"));
        // The wire form re-encodes the user-info.
        assert_eq!(
            uri.authority().to_string(),
            "YWxpY2U6cHc=@example.net:81"
        );
    }

    #[test]
    fn set_equal_to_host_is_a_no_op() {
        let mut uri = Uri::parse("https://example.com/a");
        uri.authority_mut().set("example.com");
        assert_eq!(uri.authority().user(), None);
        assert_eq!(uri.authority().get(), Some("example.com"));
    }

    #[test]
    fn set_token_decodes_and_recombines() {
        let mut uri = Uri::parse("https://example.com:8080/a");
        uri.authority_mut().set("dXNlcjpwYXNz");
        assert_eq!(uri.authority().user(), Some("user:pass"));
        assert_eq!(uri.authority().get(), Some("user:pass@example.com:8080"));
    }

    #[test]
    fn set_undecodable_token_is_kept_raw() {
        let mut uri = Uri::parse("https://example.com/a");
        uri.authority_mut().set("not base64!@ignored");
        assert_eq!(uri.authority().user(), Some("not base64!"));
        assert_eq!(uri.host().get(), Some("example.com"));
    }

    #[test]
    fn composed_shape_detection() {
        assert!(looks_composed("a:b@c"));
        assert!(looks_composed("user:pass@host:8080"));
        assert!(!looks_composed("host"));
        assert!(!looks_composed("token@host"));
        assert!(!looks_composed(":x@host"));
        assert!(!looks_composed("a:b@"));
    }
}
