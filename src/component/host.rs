//! Host component views.

use core::fmt;

use alloc::borrow::ToOwned;

use crate::model::UriModel;
use crate::parser;
use crate::uri::Uri;

/// Read view of the host component.
#[derive(Debug, Clone, Copy)]
pub struct Host<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Host<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the hostname, without port or user-info.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.model.host.as_deref()
    }
}

impl fmt::Display for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or(""))
    }
}

/// Mutating view of the host component.
#[derive(Debug)]
pub struct HostMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> HostMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the host from an authority-like string.
    ///
    /// A leading `userinfo@` section and a trailing `:digits` port suffix are
    /// discarded; only the hostname is stored. Setting an empty hostname
    /// clears the component.
    pub fn set(self, value: &str) -> &'a mut Uri {
        let model = &mut self.uri.model;
        model.host = parser::decompose_authority(value).host.map(ToOwned::to_owned);
        model.refresh_authority();
        self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_extracts_hostname() {
        let mut uri = Uri::parse("https://example.com/a");
        uri.host_mut().set("user:pass@example.org:9090");
        assert_eq!(uri.host().get(), Some("example.org"));
        // Port and user are untouched by the host setter.
        assert_eq!(uri.port().get(), None);
        assert_eq!(uri.authority().get(), Some("example.org"));
    }

    #[test]
    fn set_keeps_non_numeric_colon_suffix() {
        let mut uri = Uri::parse("https://example.com");
        uri.host_mut().set("[2001:db8::1]");
        assert_eq!(uri.host().get(), Some("[2001:db8::1]"));
    }

    #[test]
    fn set_empty_clears() {
        let mut uri = Uri::parse("https://example.com");
        uri.host_mut().set("");
        assert_eq!(uri.host().get(), None);
        assert_eq!(uri.authority().get(), None);
    }
}
