//! Per-component read and write views over a [`Uri`][`crate::Uri`].
//!
//! Each component comes as a pair of types: a read view borrowing the model
//! (`Scheme`, `Host`, ...) whose `Display` renders that component's string
//! form, and a mutating view (`SchemeMut`, `HostMut`, ...) whose setters
//! consume the view and return `&mut Uri`, so edits chain back through the
//! owning instance:
//!
//! ```
//! use uri_parts::Uri;
//!
//! let mut uri = Uri::parse("https://example.com/a");
//! uri.path_mut().append("b").query_mut().add([("k", "v")]);
//! assert_eq!(uri.to_string(), "https://example.com/a/b?k=v");
//! ```

pub mod authority;
pub mod fragment;
pub mod host;
pub mod path;
pub mod port;
pub mod query;
pub mod scheme;

pub use self::authority::{Authority, AuthorityMut};
pub use self::fragment::{Fragment, FragmentMut, Hash, HashMut};
pub use self::host::{Host, HostMut};
pub use self::path::{Path, PathMut};
pub use self::port::{Port, PortMut, PortValue};
pub use self::query::{Query, QueryMut, Value};
pub use self::scheme::{Scheme, SchemeMut};

use alloc::vec::Vec;

/// Removes the elements at the given indices.
///
/// Indices are deduplicated and processed from highest to lowest so earlier
/// removals do not shift later targets. Out-of-range indices are ignored.
pub(crate) fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut sorted: Vec<usize> = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    for &i in sorted.iter().rev() {
        if i < items.len() {
            items.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    #[test]
    fn remove_indices_is_order_independent() {
        let mut v = vec!["a", "b", "c", "d", "e"];
        remove_indices(&mut v, &[0, 2, 4]);
        assert_eq!(v, ["b", "d"]);

        let mut v = vec!["a", "b", "c", "d", "e"];
        remove_indices(&mut v, &[4, 2, 0]);
        assert_eq!(v, ["b", "d"]);
    }

    #[test]
    fn remove_indices_ignores_out_of_range_and_duplicates() {
        let mut v = vec!["a", "b"];
        remove_indices(&mut v, &[1, 1, 7]);
        assert_eq!(v, ["a"]);
    }
}
