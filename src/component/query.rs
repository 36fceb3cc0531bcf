//! Query component views.
//!
//! The query is an ordered list of key/value pairs. Duplicate keys are
//! allowed and insertion order is the serialization order.

use core::fmt;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::component::remove_indices;
use crate::model::UriModel;
use crate::percent::{self, PercentEncoded};
use crate::uri::Uri;

/// A query entry value.
///
/// Mirrors the shapes a query edit can carry: a single string, a list of
/// strings that fans out into one pair per element, or the undefined marker
/// used by [`QueryMut::merge`] to remove a key and skipped by
/// [`QueryMut::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Undefined (absent) value.
    Undefined,
    /// Single string value.
    String(String),
    /// List of string values.
    List(Vec<String>),
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<String>> for Value {
    #[inline]
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for Value {
    #[inline]
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(ToString::to_string).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

/// Parses a raw query string into decoded pairs.
///
/// Pairs split on `&` or `;`. A pair with no `=` (or with an empty key) has
/// an absent value, not an empty one, and is dropped; `key=` stores an empty
/// string. Keys and values are percent-decoded with `+` as space.
#[must_use]
pub(crate) fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split(|c| c == '&' || c == ';')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            Some((
                percent::decode_query_component(key),
                percent::decode_query_component(value),
            ))
        })
        .collect()
}

/// Appends the given entries as pairs, applying the value fan-out rules.
///
/// `Undefined` and empty-string values are silently skipped; list elements
/// are appended unfiltered, one pair per element.
fn convert_into<I, K, V>(entries: I, out: &mut Vec<(String, String)>)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    for (key, value) in entries {
        let key = key.into();
        match value.into() {
            Value::List(items) => {
                out.extend(items.into_iter().map(|item| (key.clone(), item)));
            }
            Value::String(s) if !s.is_empty() => out.push((key, s)),
            _ => {}
        }
    }
}

/// Read view of the query component.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    /// Component model of the owning URI.
    model: &'a UriModel,
}

impl<'a> Query<'a> {
    /// Creates a view over the given model.
    #[inline]
    #[must_use]
    pub(crate) fn new(model: &'a UriModel) -> Self {
        Self { model }
    }

    /// Returns all pairs in insertion order.
    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &'a [(String, String)] {
        &self.model.query
    }

    /// Returns the first value for the given key, or `None` if absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.model
            .query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns a map from each distinct key to all its values in pair order.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in &self.model.query {
            map.entry(key.clone()).or_default().push(value.clone());
        }
        map
    }

    /// Returns the verbatim `{?...}` placeholder text captured at parse time.
    #[inline]
    #[must_use]
    pub fn template_query(&self) -> Option<&'a str> {
        self.model.template_query.as_deref()
    }

    /// Returns true if the query has no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.query.is_empty()
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.model.query {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            write!(
                f,
                "{}={}",
                PercentEncoded::from_query_component(key),
                PercentEncoded::from_query_component(value)
            )?;
        }
        Ok(())
    }
}

/// Mutating view of the query component.
#[derive(Debug)]
pub struct QueryMut<'a> {
    /// Owning URI.
    uri: &'a mut Uri,
}

impl<'a> QueryMut<'a> {
    /// Creates a mutating view over the given URI.
    #[inline]
    #[must_use]
    pub(crate) fn new(uri: &'a mut Uri) -> Self {
        Self { uri }
    }

    /// Replaces the whole query from the given entries.
    pub fn set_pairs<I, K, V>(self, entries: I) -> &'a mut Uri
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.uri.model.query.clear();
        convert_into(entries, &mut self.uri.model.query);
        self.uri
    }

    /// Replaces the whole query by re-parsing the given raw query string.
    pub fn set_raw(self, raw: &str) -> &'a mut Uri {
        self.uri.model.query = parse_pairs(raw);
        self.uri
    }

    /// Merges a single key/value pair; see [`QueryMut::merge`].
    pub fn set_pair<K, V>(self, key: K, value: V) -> &'a mut Uri
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.merge(core::iter::once((key, value)))
    }

    /// Removes every pair.
    pub fn clear(self) -> &'a mut Uri {
        self.uri.model.query.clear();
        self.uri
    }

    /// Appends the given entries as new pairs, even for keys that already
    /// exist (duplicates are allowed).
    ///
    /// `Undefined` and empty-string values are silently skipped; list values
    /// append one pair per element, unfiltered.
    pub fn add<I, K, V>(self, entries: I) -> &'a mut Uri
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        convert_into(entries, &mut self.uri.model.query);
        self.uri
    }

    /// Merges the given entries, replacing by key.
    ///
    /// For each entry whose key already occurs in the query:
    ///
    /// * a string value replaces the value at the first occurrence and
    ///   removes every further occurrence of that key;
    /// * a list value consumes one element per existing occurrence in order;
    ///   occurrences beyond the list length are removed and leftover elements
    ///   are appended at the end as new pairs;
    /// * an `Undefined` value removes every occurrence of the key.
    ///
    /// Keys not already present are appended as new pairs, with the same
    /// skip rules as [`QueryMut::add`].
    pub fn merge<I, K, V>(self, entries: I) -> &'a mut Uri
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let query = &mut self.uri.model.query;
        let mut appended: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            let occurrences: Vec<usize> = query
                .iter()
                .enumerate()
                .filter(|(_, (k, _))| *k == key)
                .map(|(i, _)| i)
                .collect();
            if occurrences.is_empty() {
                appended.push((key, value));
                continue;
            }
            match value {
                Value::Undefined => remove_indices(query, &occurrences),
                Value::String(s) => {
                    query[occurrences[0]].1 = s;
                    remove_indices(query, &occurrences[1..]);
                }
                Value::List(items) => {
                    let mut items = items.into_iter();
                    let mut exhausted = Vec::new();
                    for &index in &occurrences {
                        match items.next() {
                            Some(item) => query[index].1 = item,
                            None => exhausted.push(index),
                        }
                    }
                    remove_indices(query, &exhausted);
                    let leftover: Vec<String> = items.collect();
                    if !leftover.is_empty() {
                        appended.push((key, Value::List(leftover)));
                    }
                }
            }
        }
        convert_into(appended, query);
        self.uri
    }

    /// Sets or clears the `{?...}` template placeholder text.
    pub fn set_template_query<T: Into<String>>(self, value: Option<T>) -> &'a mut Uri {
        self.uri.model.template_query = value.map(Into::into);
        self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn parse_separators_and_decoding() {
        assert_eq!(
            parse_pairs("a=1&b=2;c=a+b%21"),
            [
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "a b!".to_string()),
            ]
        );
    }

    #[test]
    fn parse_drops_bare_keys() {
        assert_eq!(parse_pairs("flag&x=1"), [("x".to_string(), "1".to_string())]);
        assert!(parse_pairs("=v").is_empty());
        assert!(parse_pairs("").is_empty());
        // `key=` keeps an empty value.
        assert_eq!(parse_pairs("k="), [("k".to_string(), String::new())]);
    }

    #[test]
    fn add_appends_duplicates() {
        let mut uri = Uri::parse("https://h?context=foo&credentials=bar");
        uri.query_mut().add([("foo", "bar")]);
        assert_eq!(
            uri.query().to_string(),
            "context=foo&credentials=bar&foo=bar"
        );
    }

    #[test]
    fn add_skips_undefined_and_empty() {
        let mut uri = Uri::parse("https://h?a=1");
        uri.query_mut()
            .add([("skipped", Value::Undefined), ("empty", Value::from(""))]);
        assert_eq!(uri.query().to_string(), "a=1");
        // List elements are appended unfiltered.
        uri.query_mut().add([("k", vec!["", "x"])]);
        assert_eq!(uri.query().to_string(), "a=1&k=&k=x");
    }

    #[test]
    fn merge_replaces_first_and_drops_duplicates() {
        let mut uri = Uri::parse("https://h?a=1&b=3&a=2");
        uri.query_mut().merge([("a", "9")]);
        assert_eq!(uri.query().to_string(), "a=9&b=3");
    }

    #[test]
    fn merge_appends_missing_keys() {
        let mut uri = Uri::parse("https://h?a=1");
        uri.query_mut().merge([("b", "2")]);
        assert_eq!(uri.query().to_string(), "a=1&b=2");
    }

    #[test]
    fn merge_undefined_removes_key() {
        let mut uri = Uri::parse("https://h?a=1&b=2&a=3");
        uri.query_mut().merge([("a", Value::Undefined)]);
        assert_eq!(uri.query().to_string(), "b=2");
    }

    #[test]
    fn merge_list_consumes_one_element_per_occurrence() {
        let mut uri = Uri::parse("https://h?a=1&b=0&a=2&a=3");
        uri.query_mut().merge([("a", vec!["x", "y"])]);
        assert_eq!(uri.query().to_string(), "a=x&b=0&a=y");
    }

    #[test]
    fn merge_list_leftover_is_appended() {
        let mut uri = Uri::parse("https://h?a=1&b=0");
        uri.query_mut().merge([("a", vec!["x", "y", "z"])]);
        assert_eq!(uri.query().to_string(), "a=x&b=0&a=y&a=z");
    }

    #[test]
    fn set_pair_is_a_single_merge() {
        let mut uri = Uri::parse("https://h?a=1&a=2");
        uri.query_mut().set_pair("a", "9");
        assert_eq!(uri.query().to_string(), "a=9");
    }

    #[test]
    fn get_first_value_and_map() {
        let uri = Uri::parse("https://h?a=1&b=2&a=3");
        assert_eq!(uri.query().get("a"), Some("1"));
        assert_eq!(uri.query().get("missing"), None);
        let map = uri.query().to_map();
        assert_eq!(map["a"], ["1", "3"]);
        assert_eq!(map["b"], ["2"]);
    }

    #[test]
    fn display_encodes_keys_and_values() {
        let mut uri = Uri::parse("https://h");
        uri.query_mut().add([("key one", "a&b=c")]);
        assert_eq!(uri.query().to_string(), "key%20one=a%26b%3Dc");
    }

    #[test]
    fn template_query_round_trip() {
        let mut uri = Uri::parse("https://h/p{?a,b,c}");
        assert_eq!(uri.query().template_query(), Some("a,b,c"));
        assert!(uri.query().is_empty());
        uri.query_mut().set_template_query(None::<&str>);
        assert_eq!(uri.query().template_query(), None);
    }
}
