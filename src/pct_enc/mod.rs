//! Percent-encoding utilities.

pub mod encoder;
pub mod table;

pub use encoder::Encoder;
pub use table::Table;

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{fmt, hash, iter::FusedIterator, str};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// Percent-encoded string slices.
///
/// An `EStr` is a string slice in which every `'%'` starts a well-formed
/// percent-encoded octet, i.e., is followed by two hexadecimal digits.
/// Any other character, ASCII or not, may appear unencoded, since the
/// components of a package URL are decoded leniently.
///
/// # Examples
///
/// Decode the value of a qualifier:
///
/// ```
/// use purl_canon::pct_enc::EStr;
///
/// let value = EStr::new("val%3Due").unwrap();
/// assert_eq!(value.decode().to_string().unwrap(), "val=ue");
///
/// assert!(EStr::new("100%").is_none());
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr {
    inner: str,
}

impl EStr {
    /// Converts a string slice to an `EStr` slice assuming validity.
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EStr` slice, returning `None` if the
    /// string contains an invalid percent-encoded octet.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Self> {
        match first_invalid_octet(s.as_bytes()) {
            None => Some(Self::new_validated(s)),
            Some(_) => None,
        }
    }

    /// Converts a string slice to an `EStr` slice.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the index of the first invalid
    /// percent-encoded octet in the string.
    pub(crate) fn try_new(s: &str) -> Result<&Self, usize> {
        match first_invalid_octet(s.as_bytes()) {
            None => Ok(Self::new_validated(s)),
            Some(i) => Err(i),
        }
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator used to decode the `EStr` slice.
    ///
    /// Always **split before decoding**, as otherwise the data may be
    /// mistaken for component delimiters.
    ///
    /// Note that the iterator will **not** decode `U+002B` (+) as `0x20` (space).
    pub fn decode(&self) -> Decode<'_> {
        Decode::new(&self.inner)
    }
}

impl AsRef<str> for EStr {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for EStr {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EStr {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<EStr> for str {
    fn eq(&self, other: &EStr) -> bool {
        self == &other.inner
    }
}

impl Eq for EStr {}

impl hash::Hash for EStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl Default for &EStr {
    fn default() -> Self {
        EStr::EMPTY
    }
}

impl fmt::Debug for EStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for EStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

const fn first_invalid_octet(s: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'%' {
            if i + 2 >= s.len() || !is_hexdig_pair(s[i + 1], s[i + 2]) {
                return Some(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}

pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    table::HEXDIG.allows_ascii(hi) && table::HEXDIG.allows_ascii(lo)
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// An iterator used to decode an [`EStr`] slice.
///
/// This struct is created by [`EStr::decode`]. Normally you'll use the methods below
/// instead of iterating over a `Decode` manually.
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn next_if_unencoded(&mut self) -> Option<&'a str> {
        let i = self
            .source
            .bytes()
            .position(|x| x == b'%')
            .unwrap_or(self.source.len());

        if i == 0 {
            None
        } else {
            let s;
            (s, self.source) = self.source.split_at(i);
            Some(s)
        }
    }

    fn decoded_len(&self) -> usize {
        self.source.len() - self.source.bytes().filter(|&x| x == b'%').count() * 2
    }

    /// Decodes the slice to bytes.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(mut self) -> Cow<'a, [u8]> {
        let mut buf = match self.next_if_unencoded() {
            Some(s) if self.source.is_empty() => return Cow::Borrowed(s.as_bytes()),
            Some(s) => {
                let mut buf = Vec::with_capacity(s.len() + self.decoded_len());
                buf.extend_from_slice(s.as_bytes());
                buf
            }
            None if self.source.is_empty() => return Cow::Borrowed(&[]),
            None => Vec::with_capacity(self.decoded_len()),
        };

        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        Cow::Owned(buf)
    }

    /// Attempts to decode the slice to a string.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        match self.to_bytes() {
            Cow::Borrowed(bytes) => match str::from_utf8(bytes) {
                Ok(s) => Ok(Cow::Borrowed(s)),
                Err(_) => Err(bytes.to_vec()),
            },
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            None
        } else if let Some(s) = self.next_if_unencoded() {
            Some(DecodedChunk::Unencoded(s))
        } else {
            let s;
            (s, self.source) = self.source.split_at(3);
            let x = decode_octet(s.as_bytes()[1], s.as_bytes()[2]);
            Some(DecodedChunk::PctDecoded(x))
        }
    }
}

impl FusedIterator for Decode<'_> {}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to percent-encode a string slice with a table.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

impl<'s> Encode<'s> {
    fn new(table: Table, source: &'s str) -> Self {
        Self {
            table,
            source,
            to_enc: &[],
        }
    }
}

impl<'s> Iterator for Encode<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<&'s str> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(encode_byte(*x));
        }

        if self.source.is_empty() {
            return None;
        }

        let bytes = self.source.as_bytes();
        let allowed_len = bytes
            .iter()
            .position(|&x| !self.table.allows_ascii(x))
            .unwrap_or(bytes.len());

        if allowed_len > 0 {
            let allowed;
            (allowed, self.source) = self.source.split_at(allowed_len);
            return Some(allowed);
        }

        // `to_enc` only ever ends on a character boundary, as every byte
        // the table allows is ASCII.
        let unallowed_len = bytes
            .iter()
            .position(|&x| self.table.allows_ascii(x))
            .unwrap_or(bytes.len());

        let (unallowed, rem) = self.source.split_at(unallowed_len);
        self.source = rem;
        self.to_enc = &unallowed.as_bytes()[1..];
        Some(encode_byte(unallowed.as_bytes()[0]))
    }
}

impl FusedIterator for Encode<'_> {}

/// Percent-encodes a string with the given encoder.
///
/// Every character not allowed by `E::TABLE` is encoded as its UTF-8 bytes,
/// each written as `%XX` with uppercase hexadecimal digits.
/// Borrows the input when nothing needs to be encoded.
///
/// # Examples
///
/// ```
/// use purl_canon::pct_enc::{encode, encoder::{Name, Namespace}};
///
/// assert_eq!(encode::<Namespace>("@angular/core"), "%40angular/core");
/// assert_eq!(encode::<Name>("a/b:c d"), "a%2Fb:c%20d");
/// assert_eq!(encode::<Name>("ünïcode"), "%C3%BCn%C3%AFcode");
/// ```
pub fn encode<E: Encoder>(s: &str) -> Cow<'_, str> {
    if E::TABLE.validate(s.as_bytes()) {
        Cow::Borrowed(s)
    } else {
        let mut buf = String::with_capacity(s.len() + s.len() / 2);
        encode_to::<E>(s, &mut buf);
        Cow::Owned(buf)
    }
}

/// Percent-encodes a string with the given encoder and appends the result
/// onto the end of a buffer.
///
/// Note that this function will **not** encode `U+0020` (space) as `U+002B` (+).
pub fn encode_to<E: Encoder>(s: &str, buf: &mut String) {
    buf.extend(Encode::new(E::TABLE, s));
}

/// Writes a string percent-encoded with the given encoder to a formatter.
pub(crate) fn write_encoded<E: Encoder>(f: &mut dyn fmt::Write, s: &str) -> fmt::Result {
    Encode::new(E::TABLE, s).try_for_each(|chunk| f.write_str(chunk))
}

#[cfg(test)]
mod tests {
    use super::{encoder::*, *};

    #[test]
    fn decode_chunks() {
        let s = EStr::new("a%2Fb%2f").unwrap();
        assert!(s.decode().eq([
            DecodedChunk::Unencoded("a"),
            DecodedChunk::PctDecoded(b'/'),
            DecodedChunk::Unencoded("b"),
            DecodedChunk::PctDecoded(b'/'),
        ]));
    }

    #[test]
    fn decode_borrows_when_unencoded() {
        let s = EStr::new("plain").unwrap();
        let dec = s.decode().to_bytes();
        assert!(matches!(dec, Cow::Borrowed(_)));
        assert_eq!(*dec, *b"plain");
        assert!(EStr::EMPTY.decode().to_bytes().is_empty());
    }

    #[test]
    fn invalid_octets() {
        assert_eq!(EStr::try_new("%"), Err(0));
        assert_eq!(EStr::try_new("ab%2"), Err(2));
        assert_eq!(EStr::try_new("%2d%fg"), Err(3));
        assert!(EStr::try_new("%2d%FF").is_ok());
    }

    #[test]
    fn invalid_utf8() {
        let s = EStr::new("%C3%28").unwrap();
        assert_eq!(s.decode().to_string(), Err(vec![0xc3, 0x28]));
    }

    #[test]
    fn encode_multibyte() {
        assert_eq!(encode::<Subpath>("😃/x"), "%F0%9F%98%83/x");
        assert_eq!(encode::<QualifierValue>("a b/c:d"), "a%20b/c%3Ad");
        assert!(matches!(encode::<Version>("1.0:rc"), Cow::Borrowed(_)));
    }
}
