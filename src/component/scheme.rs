//! Scheme component views.

use core::fmt;

use alloc::borrow::ToOwned;

use crate::model::UriModel;
use crate::parser;
use crate::uri::Uri;

/// Read view of the scheme component.
#[derive(Debug, Clone, Copy)]
pub struct Scheme<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Scheme<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the scheme name, without the trailing colon.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.model.scheme.as_deref()
    }
}

impl fmt::Display for Scheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or(""))
    }
}

/// Mutating view of the scheme component.
#[derive(Debug)]
pub struct SchemeMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> SchemeMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the scheme.
    ///
    /// Accepts either a full `scheme:` prefix (the name before the colon is
    /// extracted) or a bare scheme token. A bare value containing `/` is
    /// rejected as a no-op, so path text cannot be misread as a scheme; the
    /// empty string is also a no-op.
    pub fn set(self, value: &str) -> &'a mut Uri {
        let model = &mut self.uri.model;
        match value.split_once(':') {
            Some((name, _)) if parser::is_scheme_token(name) => {
                model.scheme = Some(name.to_owned());
            }
            _ if !value.is_empty() && !value.contains('/') => {
                model.scheme = Some(value.to_owned());
            }
            _ => {}
        }
        self.uri
    }
}
