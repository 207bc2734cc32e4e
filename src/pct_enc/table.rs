//! Byte pattern tables for package URL components.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// A table specifying the ASCII characters allowed unencoded in a string.
///
/// Every byte not allowed by a table, including all non-ASCII bytes,
/// is percent-encoded when encoding with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the bytes allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given byte is allowed unencoded by the table.
    #[inline]
    #[must_use]
    pub const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given character is allowed unencoded by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Checks whether every byte of the string is allowed by the table.
    #[must_use]
    pub const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            if !self.allows_ascii(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

// Rules from RFC 3986:

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

// Rules for package URL components:

/// `type = ALPHA 1*( ALPHA / DIGIT / "." / "-" )`
///
/// This table covers every character but the first.
pub const TYPE: Table = ALPHA.or(DIGIT).or(new(b".-"));

/// `qualifier-key = ALPHA *( ALPHA / DIGIT / "." / "_" / "-" )`
///
/// This table covers every character but the first.
pub const QUALIFIER_KEY: Table = ALPHA.or(DIGIT).or(new(b"._-"));

/// `namespace = segment *( "/" segment )`, segments encoded with `unreserved`.
pub const NAMESPACE: Table = UNRESERVED.or(new(b"/"));

/// `name = *( unreserved / ":" )`
pub const NAME: Table = UNRESERVED.or(new(b":"));

/// `version = *( unreserved / ":" )`
pub const VERSION: Table = NAME;

/// `qualifier-value = *( unreserved / "/" )`
pub const QUALIFIER_VALUE: Table = UNRESERVED.or(new(b"/"));

/// `subpath = *( unreserved / "/" / ":" )`
pub const SUBPATH: Table = UNRESERVED.or(new(b"/:"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_tables() {
        assert!(UNRESERVED.is_subset(NAMESPACE));
        assert!(UNRESERVED.is_subset(SUBPATH));
        assert!(NAME.is_subset(SUBPATH));
        assert!(QUALIFIER_VALUE.is_subset(SUBPATH));

        assert!(NAMESPACE.allows('/'));
        assert!(!NAMESPACE.allows(':'));
        assert!(NAME.allows(':'));
        assert!(!NAME.allows('/'));
        assert!(!QUALIFIER_VALUE.allows(':'));
        assert!(!SUBPATH.allows('@'));
        assert!(!UNRESERVED.allows('é'));

        assert_eq!(SUBPATH.sub(new(b":")), NAMESPACE);
        assert!(TYPE.validate(b"npm.v2-beta"));
        assert!(!TYPE.validate(b"np_m"));
    }
}
