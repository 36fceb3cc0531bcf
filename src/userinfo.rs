//! Reversible user-info codec.
//!
//! The authority component never carries user-info in the clear on the wire:
//! the serialized form holds a standard base64 token, and the model holds the
//! decoded text. Decoding is best-effort; a token that is not valid base64
//! (or does not decode to UTF-8) is passed through unchanged by the callers.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use alloc::string::String;

use base64ct::{Base64, Encoding};

/// User-info token decode error.
// Note that this type should implement `Copy` trait.
// To return additional non-`Copy` data as an error, use wrapper type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserinfoDecodeError(());

impl UserinfoDecodeError {
    /// Creates a new `UserinfoDecodeError`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    fn new() -> Self {
        Self(())
    }
}

impl fmt::Display for UserinfoDecodeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid user-info token")
    }
}

#[cfg(feature = "std")]
impl error::Error for UserinfoDecodeError {}

/// Encodes raw user-info into its wire form.
///
/// # Examples
///
/// ```
/// assert_eq!(uri_parts::userinfo::encode("user:pass"), "dXNlcjpwYXNz");
/// ```
#[inline]
#[must_use]
pub fn encode(raw: &str) -> String {
    Base64::encode_string(raw.as_bytes())
}

/// Decodes a wire-form user-info token.
///
/// Fails if the token is not canonical base64 or the decoded bytes are not
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     uri_parts::userinfo::decode("dXNlcjpwYXNz").as_deref(),
///     Ok("user:pass")
/// );
/// assert!(uri_parts::userinfo::decode("not base64!").is_err());
/// ```
pub fn decode(token: &str) -> Result<String, UserinfoDecodeError> {
    let bytes = Base64::decode_vec(token).map_err(|_| UserinfoDecodeError::new())?;
    String::from_utf8(bytes).map_err(|_| UserinfoDecodeError::new())
}
