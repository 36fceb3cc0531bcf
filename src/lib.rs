//! Decompose, edit, and recompose URI strings component by component.
//!
//! [`Uri`] splits a URI string into its structural parts (scheme, user-info,
//! host, port, path segments, query pairs, fragment) and keeps them in one
//! shared component model. Per-component views read and mutate that model, and
//! `Display` on [`Uri`] reassembles the canonical string form.
//!
//! This crate never rejects input: malformed or partial URIs degrade to
//! absent/empty components instead of raising errors. It is not an RFC 3986
//! validator, not a URI-Template expander (the `{?...}` query placeholder is
//! only extracted verbatim), and performs no I/O.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use uri_parts::Uri;
//!
//! let mut uri = Uri::parse("https://big.example.com/path/to/file.xml?context=foo");
//! uri.path_mut()
//!     .replace_at(1, "new-to")
//!     .query_mut()
//!     .merge([("context", "bar")]);
//! assert_eq!(
//!     uri.to_string(),
//!     "https://big.example.com/path/new-to/file.xml?context=bar"
//! );
//! # }
//! ```
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + The component model owns its decoded strings, so the whole public
//!       API lives under this feature.
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature let the crate utilize std-specific stuff, such as
//!       `std::error::Error` trait.
//!
//! # Canonical form
//!
//! Serialization is intentionally asymmetric with parsing:
//!
//! * Path segments are percent-decoded when parsed and are **not** re-encoded
//!   on output.
//! * Query keys and values are decoded when parsed (including `+` to space)
//!   and re-encoded on output.
//! * The user-info token is treated as reversibly encoded (standard base64):
//!   decoded when parsed if possible, always re-encoded on output.
//!
//! A host-only URI serializes without a trailing slash, and a fragment is
//! written before the query (`#fragment?query`); the parser accepts both
//! orders, so canonical strings round-trip.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub(crate) mod assemble;
#[cfg(feature = "alloc")]
pub mod component;
#[cfg(feature = "alloc")]
pub(crate) mod model;
#[cfg(feature = "alloc")]
pub(crate) mod parser;
#[cfg(feature = "alloc")]
pub mod percent;
#[cfg(feature = "alloc")]
pub(crate) mod uri;
#[cfg(feature = "alloc")]
pub mod userinfo;

#[cfg(feature = "alloc")]
pub use crate::component::query::Value;
#[cfg(feature = "alloc")]
pub use crate::uri::Uri;
