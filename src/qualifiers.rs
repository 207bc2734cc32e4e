//! Key-value collection for package URL qualifiers.

use crate::{
    error::{err, Result},
    grammar, parse,
};
use alloc::{
    collections::{btree_map, BTreeMap, BTreeSet},
    string::String,
};
use core::iter::FusedIterator;

/// The qualifiers of a package URL.
///
/// Qualifiers are stored sorted by key in ascending byte order, ready to be
/// joined into a canonical package URL string regardless of insertion order.
///
/// The following hold for every `Qualifiers`:
///
/// - Keys are lowercase and match `ALPHA *( ALPHA / DIGIT / "." / "_" / "-" )`.
/// - Keys are unique.
/// - Values are decoded and never empty.
///
/// # Examples
///
/// ```
/// use purl_canon::{PackageUrl, Qualifiers};
///
/// let mut qualifiers = Qualifiers::new();
/// qualifiers.insert("OS", "linux")?.insert("arch", "x86_64")?;
///
/// assert!(qualifiers.iter().eq([("arch", "x86_64"), ("os", "linux")]));
///
/// let purl = PackageUrl::builder("deb", "curl")
///     .qualifiers(qualifiers)
///     .build()?;
/// assert_eq!(purl.to_string(), "pkg:deb/curl?arch=x86_64&os=linux");
/// # Ok::<_, purl_canon::ParseError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Qualifiers {
    map: BTreeMap<String, String>,
}

impl Qualifiers {
    /// Creates an empty `Qualifiers`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a qualifier.
    ///
    /// The key is lowercased. The value is taken as is, without decoding.
    /// Inserting an empty value does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the key is invalid or is already present.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Result<&mut Self> {
        grammar::check_qualifier_key(key)?;
        let value = value.into();
        if value.is_empty() {
            return Ok(self);
        }
        match self.map.entry(key.to_ascii_lowercase()) {
            btree_map::Entry::Occupied(_) => err!(0, DuplicateQualifierKey),
            btree_map::Entry::Vacant(e) => {
                e.insert(value);
            }
        }
        Ok(self)
    }

    /// Creates a `Qualifiers` from key-value pairs.
    ///
    /// # Errors
    ///
    /// Returns `Err` under the same conditions as [`insert`](Self::insert).
    pub fn try_from_iter<I, K, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut this = Self::new();
        for (key, value) in items {
            this.insert(key.as_ref(), value)?;
        }
        Ok(this)
    }

    /// Parses the raw qualifier string of a package URL, i.e., what follows `'?'`.
    ///
    /// `offset` is the index of the string in the whole input.
    pub(crate) fn parse(s: &str, offset: usize) -> Result<Self> {
        let mut map = BTreeMap::new();
        let mut seen = BTreeSet::new();

        let mut start = offset;
        for pair in s.split('&') {
            let pair_start = start;
            start += pair.len() + 1;

            let Some((key, value)) = pair.split_once('=') else {
                log_debug!("skipping qualifier without '=' at index {pair_start}");
                continue;
            };
            grammar::check_qualifier_key(key).map_err(|e| e.at(pair_start))?;

            let key = key.to_ascii_lowercase();
            if !seen.insert(key.clone()) {
                err!(pair_start, DuplicateQualifierKey);
            }

            let value_start = pair_start + key.len() + 1;
            let value = parse::decode(value, value_start)?;

            if !value.is_empty() {
                map.insert(key, value.into_owned());
            }
        }
        Ok(Self { map })
    }

    /// Returns the value of the qualifier with the given key.
    ///
    /// The key is matched case-insensitively, as all keys are stored lowercase.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = if key.bytes().any(|x| x.is_ascii_uppercase()) {
            self.map.get(&key.to_ascii_lowercase())
        } else {
            self.map.get(key)
        };
        value.map(String::as_str)
    }

    /// Checks whether a qualifier with the given key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of qualifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether there are no qualifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the qualifiers, sorted by key.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.map.iter())
    }
}

impl<'a> IntoIterator for &'a Qualifiers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over the qualifiers of a package URL, sorted by key.
///
/// This struct is created by [`Qualifiers::iter`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    #[test]
    fn parse_pairs() {
        let q = Qualifiers::parse("Arch=i386&empty=&novalue&key=val%3Due", 0).unwrap();
        assert!(q.iter().eq([("arch", "i386"), ("key", "val=ue")]));
        assert_eq!(q.get("ARCH"), Some("i386"));
        assert!(!q.contains_key("empty"));
        assert!(!q.contains_key("novalue"));
    }

    #[test]
    fn parse_errors() {
        let e = Qualifiers::parse("a=1&bad!key=v", 10).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidQualifierKey);
        assert_eq!(e.index(), 14);

        let e = Qualifiers::parse("=novalue", 0).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidQualifierKey);

        let e = Qualifiers::parse("os=a&OS=b", 0).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::DuplicateQualifierKey);
        assert_eq!(e.index(), 5);

        // An empty value is dropped, but its key still counts.
        let e = Qualifiers::parse("os=&os=b", 0).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::DuplicateQualifierKey);

        let e = Qualifiers::parse("os=%4", 0).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
        assert_eq!(e.index(), 3);

        let e = Qualifiers::parse("os=%FF", 0).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidUtf8);
    }

    #[test]
    fn insert() {
        let mut q = Qualifiers::new();
        q.insert("b", "2").unwrap().insert("A", "1").unwrap();
        q.insert("c", "").unwrap();
        assert!(q.iter().eq([("a", "1"), ("b", "2")]));
        assert_eq!(q.len(), 2);

        let e = q.insert("B", "3").unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::DuplicateQualifierKey);
        assert_eq!(q.get("b"), Some("2"));
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = Qualifiers::try_from_iter([("x", "1"), ("y", "2"), ("z", "3")]).unwrap();
        let b = Qualifiers::try_from_iter([("z", "3"), ("x", "1"), ("y", "2")]).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().rev().map(|(k, _)| k).eq(["z", "y", "x"]));
    }
}
