//! Port component views.

use core::fmt;

use alloc::string::{String, ToString};

use crate::model::UriModel;
use crate::uri::Uri;

/// Read view of the port component.
#[derive(Debug, Clone, Copy)]
pub struct Port<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Port<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the port digits, without the leading colon.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.model.port.as_deref()
    }
}

impl fmt::Display for Port<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or(""))
    }
}

/// A port setter argument: a number, or text ending in digits.
#[derive(Debug, Clone)]
pub struct PortValue(String);

impl From<u16> for PortValue {
    #[inline]
    fn from(v: u16) -> Self {
        Self(v.to_string())
    }
}

impl From<&str> for PortValue {
    #[inline]
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for PortValue {
    #[inline]
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Mutating view of the port component.
#[derive(Debug)]
pub struct PortMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> PortMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the port from a number or a string ending in digits.
    ///
    /// Only the trailing digit run is stored, so `:8080` and `host:8080` both
    /// set `8080`. A value with no trailing digits is a no-op.
    pub fn set<V: Into<PortValue>>(self, value: V) -> &'a mut Uri {
        let raw = value.into().0;
        let bytes = raw.as_bytes();
        let start = bytes
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |i| i + 1);
        if start == bytes.len() {
            return self.uri;
        }
        let model = &mut self.uri.model;
        model.port = Some(raw[start..].to_string());
        model.refresh_authority();
        self.uri
    }
}
