//! String assembly helper for the serializer.

use alloc::string::String;

/// A minimal append/insert string builder.
///
/// The serializer composes the canonical URI form piece by piece through this
/// type instead of formatting into intermediate strings.
#[derive(Default, Debug, Clone)]
pub(crate) struct Assembler {
    /// Accumulated content.
    buf: String,
}

impl Assembler {
    /// Creates an empty assembler.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends the given string slice to the end.
    #[inline]
    pub(crate) fn append(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Returns true if nothing has been appended yet.
    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the assembled content.
    #[inline]
    #[must_use]
    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the assembler and returns the assembled string.
    #[inline]
    #[must_use]
    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
