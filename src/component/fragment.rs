//! Fragment and hash component views.
//!
//! Both views render the same underlying model field: the hash form includes
//! the leading `#`, the fragment form does not. Setting one is always visible
//! through the other.

use core::fmt;

use alloc::format;
use alloc::string::{String, ToString};

use crate::model::UriModel;
use crate::uri::Uri;

/// Read view of the fragment component (without the leading `#`).
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Fragment<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the fragment text, without the leading `#`.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.model.fragment.as_deref()
    }
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or(""))
    }
}

/// Read view of the hash component (with the leading `#`).
#[derive(Debug, Clone, Copy)]
pub struct Hash<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Hash<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the fragment with its leading `#`.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.model.fragment.as_deref().map(|f| format!("#{}", f))
    }
}

impl fmt::Display for Hash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model.fragment {
            Some(fragment) => write!(f, "#{}", fragment),
            None => Ok(()),
        }
    }
}

/// Mutating view of the fragment component.
#[derive(Debug)]
pub struct FragmentMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> FragmentMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the fragment, stripping one leading `#` if present.
    pub fn set(self, value: &str) -> &'a mut Uri {
        let value = value.strip_prefix('#').unwrap_or(value);
        self.uri.model.fragment = Some(value.to_string());
        self.uri
    }

    /// Clears the fragment.
    pub fn clear(self) -> &'a mut Uri {
        self.uri.model.fragment = None;
        self.uri
    }
}

/// Mutating view of the hash component.
#[derive(Debug)]
pub struct HashMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> HashMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Sets the fragment from hash-style input.
    ///
    /// Everything from the first `?` is dropped, then the first `#` of what
    /// remains is removed; the rest is stored.
    pub fn set(self, value: &str) -> &'a mut Uri {
        let value = value.split_once('?').map_or(value, |(before, _)| before);
        let fragment = match value.split_once('#') {
            Some((before, after)) => format!("{}{}", before, after),
            None => value.to_string(),
        };
        self.uri.model.fragment = Some(fragment);
        self.uri
    }
}
