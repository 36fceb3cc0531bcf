//! The shared component model behind a [`Uri`][`crate::Uri`] instance.

use alloc::string::String;
use alloc::vec::Vec;

use crate::assemble::Assembler;

/// Decoded components of one URI instance.
///
/// Exactly one model exists per [`Uri`][`crate::Uri`]; every component view
/// borrows it, so interdependent setters (authority vs. host/port) write
/// through the same fields.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct UriModel {
    /// Scheme name, without the trailing colon.
    pub(crate) scheme: Option<String>,
    /// User-info in decoded form (before the base64 output transform).
    pub(crate) user: Option<String>,
    /// Hostname only, without port or user-info.
    pub(crate) host: Option<String>,
    /// Port digits, without the leading colon.
    pub(crate) port: Option<String>,
    /// Cached `user@host:port` composition in decoded form.
    ///
    /// Refreshed by every setter that touches `user`, `host`, or `port`.
    pub(crate) authority: Option<String>,
    /// Path segments, percent-decoded, without separators.
    pub(crate) path: Vec<String>,
    /// Query key/value pairs in insertion order. Duplicate keys are allowed.
    pub(crate) query: Vec<(String, String)>,
    /// Fragment without the leading `#`.
    pub(crate) fragment: Option<String>,
    /// Verbatim text inside a `{?...}` URI-Template query placeholder.
    pub(crate) template_query: Option<String>,
}

impl UriModel {
    /// Recomposes the cached authority string from `user`, `host`, and `port`.
    pub(crate) fn refresh_authority(&mut self) {
        let mut s = Assembler::new();
        if let Some(user) = &self.user {
            s.append(user).append("@");
        }
        if let Some(host) = &self.host {
            s.append(host);
        }
        if let Some(port) = &self.port {
            s.append(":").append(port);
        }
        self.authority = if s.is_empty() {
            None
        } else {
            Some(s.into_string())
        };
    }
}
