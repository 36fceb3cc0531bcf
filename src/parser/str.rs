//! String scanning helpers.

/// Returns the position of the first occurrence of the given byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find_byte(haystack: &str, needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack.as_bytes())
}

/// Returns the position of the first occurrence of the given byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find_byte(haystack: &str, needle: u8) -> Option<usize> {
    haystack.as_bytes().iter().position(|&b| b == needle)
}

/// Returns the position of the first occurrence of any of the two given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find_byte2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    memchr::memchr2(needle1, needle2, haystack.as_bytes())
}

/// Returns the position of the first occurrence of any of the two given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find_byte2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    haystack
        .as_bytes()
        .iter()
        .position(|&b| b == needle1 || b == needle2)
}

/// Returns the position of the first occurrence of any of the three given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find_byte3(haystack: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    memchr::memchr3(needle1, needle2, needle3, haystack.as_bytes())
}

/// Returns the position of the first occurrence of any of the three given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find_byte3(haystack: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    haystack
        .as_bytes()
        .iter()
        .position(|&b| b == needle1 || b == needle2 || b == needle3)
}

/// Splits the string at the first occurrence of the given byte.
///
/// The delimiter is not included in either part.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(i: &str, needle: u8) -> Option<(&str, &str)> {
    find_byte(i, needle).map(|pos| (&i[..pos], &i[(pos + 1)..]))
}

/// Splits the string at the first occurrence of any of the two given bytes.
///
/// The delimiter is kept at the head of the latter part.
#[inline]
#[must_use]
pub(crate) fn find_split2(i: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    find_byte2(i, needle1, needle2).map(|pos| i.split_at(pos))
}

/// Splits the string at the first occurrence of any of the three given bytes.
///
/// The delimiter is kept at the head of the latter part.
#[inline]
#[must_use]
pub(crate) fn find_split3(i: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    find_byte3(i, needle1, needle2, needle3).map(|pos| i.split_at(pos))
}

/// Splits the string at the first occurrence of any of the four given bytes.
///
/// The matched byte is returned as the middle element and is not included in
/// either of the surrounding parts.
#[must_use]
pub(crate) fn find_split4_hole(
    i: &str,
    needle1: u8,
    needle2: u8,
    needle3: u8,
    needle4: u8,
) -> Option<(&str, u8, &str)> {
    let pos = i
        .as_bytes()
        .iter()
        .position(|&b| b == needle1 || b == needle2 || b == needle3 || b == needle4)?;
    Some((&i[..pos], i.as_bytes()[pos], &i[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the given byte.
///
/// The delimiter is not included in either part.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(i: &str, needle: u8) -> Option<(&str, &str)> {
    let pos = i.as_bytes().iter().rposition(|&b| b == needle)?;
    Some((&i[..pos], &i[(pos + 1)..]))
}

/// Finds the byte range enclosed by the given two-byte opener and the closing byte.
///
/// Returns the content between the end of the first `open` occurrence and the
/// next `close` byte after it.
#[must_use]
pub(crate) fn find_enclosed(i: &str, open: [u8; 2], close: u8) -> Option<&str> {
    let bytes = i.as_bytes();
    let mut search_from = 0;
    while let Some(rel) = find_byte(&i[search_from..], open[0]) {
        let start = search_from + rel;
        if bytes.get(start + 1) == Some(&open[1]) {
            let inner = &i[(start + 2)..];
            return find_byte(inner, close).map(|end| &inner[..end]);
        }
        search_from = start + 1;
    }
    None
}
