//! Path component views.
//!
//! The path is an ordered sequence of percent-decoded segments. Segments are
//! **not** re-encoded on output; see the crate-level notes on canonical form.

use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::component::remove_indices;
use crate::model::UriModel;
use crate::percent;
use crate::uri::Uri;

/// Parses a raw path string into decoded segments.
///
/// The whole string is percent-decoded first and then split on `/`. A leading
/// empty segment (from a leading slash) is dropped, and a trailing empty
/// segment is dropped only when more than one segment remains and the decoded
/// string ends with `/`.
#[must_use]
pub(crate) fn parse_segments(raw: &str) -> Vec<String> {
    let decoded = percent::decode(raw);
    let mut segments: Vec<String> = decoded.split('/').map(ToString::to_string).collect();
    if decoded.starts_with('/') {
        segments.remove(0);
    }
    if segments.first().map_or(false, String::is_empty) {
        segments.remove(0);
    }
    if segments.len() > 1 && decoded.ends_with('/') {
        segments.pop();
    }
    segments
}

/// Read view of the path component.
#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Path<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns the decoded segments in order.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &'a [String] {
        &self.model.path
    }

    /// Returns true if the path has no segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.path.is_empty()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.model.path {
            if !first {
                f.write_str("/")?;
            }
            first = false;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Mutating view of the path component.
#[derive(Debug)]
pub struct PathMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> PathMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Replaces the whole path by re-parsing the given raw string.
    pub fn set(self, raw: &str) -> &'a mut Uri {
        self.uri.model.path = parse_segments(raw);
        self.uri
    }

    /// Appends one segment to the end.
    ///
    /// The segment is stored as given; it is not re-parsed or split.
    pub fn append(self, segment: &str) -> &'a mut Uri {
        self.uri.model.path.push(segment.to_string());
        self.uri
    }

    /// Replaces the segment at the given index.
    ///
    /// An out-of-range index is a no-op.
    pub fn replace_at(self, index: usize, value: &str) -> &'a mut Uri {
        if let Some(segment) = self.uri.model.path.get_mut(index) {
            *segment = value.to_string();
        }
        self.uri
    }

    /// Replaces the last segment (the "file" position).
    ///
    /// On an empty path the value is appended instead.
    pub fn replace_last(self, value: &str) -> &'a mut Uri {
        match self.uri.model.path.last_mut() {
            Some(last) => *last = value.to_string(),
            None => self.uri.model.path.push(value.to_string()),
        }
        self.uri
    }

    /// Removes the last segment, if any.
    pub fn delete_last(self) -> &'a mut Uri {
        self.uri.model.path.pop();
        self.uri
    }

    /// Removes the segment at the given index.
    ///
    /// An out-of-range index is a no-op.
    pub fn delete_at(self, index: usize) -> &'a mut Uri {
        if index < self.uri.model.path.len() {
            self.uri.model.path.remove(index);
        }
        self.uri
    }

    /// Removes all segments at the given indices.
    ///
    /// Indices are processed from highest to lowest so earlier removals do
    /// not shift later targets; out-of-range indices are ignored.
    pub fn delete_many(self, indices: &[usize]) -> &'a mut Uri {
        remove_indices(&mut self.uri.model.path, indices);
        self.uri
    }
}
