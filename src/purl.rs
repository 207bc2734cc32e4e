use crate::{build::Builder, error::ParseError, parse, qualifiers::Qualifiers};
use alloc::string::String;
use core::str::FromStr;

/// A [package URL] (purl).
///
/// [package URL]: https://github.com/package-url/purl-spec
///
/// A `PackageUrl` is immutable: once parsed or built, its components are
/// validated and normalized, and the only way to change one is to build
/// a new `PackageUrl`.
///
/// # Canonical form
///
/// The [`Display`](core::fmt::Display) implementation writes the canonical string
/// `pkg:type/namespace/name@version?qualifiers#subpath`, with qualifiers sorted
/// by key and every component percent-encoded. Two package URLs are equal
/// if and only if their canonical strings are equal, and parsing a canonical
/// string yields the same package URL.
///
/// # Examples
///
/// ```
/// use purl_canon::PackageUrl;
///
/// let purl = PackageUrl::parse("pkg:pypi/Django_Rest@1.0?Arch=i386&empty=")?;
///
/// assert_eq!(purl.scheme(), "pkg");
/// assert_eq!(purl.ty(), "pypi");
/// assert_eq!(purl.namespace(), None);
/// assert_eq!(purl.name(), "django-rest");
/// assert_eq!(purl.version(), Some("1.0"));
/// assert_eq!(purl.qualifiers().get("arch"), Some("i386"));
/// assert_eq!(purl.subpath(), None);
///
/// assert_eq!(purl.to_string(), "pkg:pypi/django-rest@1.0?arch=i386");
/// # Ok::<_, purl_canon::ParseError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PackageUrl {
    pub(crate) ty: String,
    pub(crate) namespace: Option<String>,
    pub(crate) name: String,
    pub(crate) version: Option<String>,
    pub(crate) qualifiers: Qualifiers,
    pub(crate) subpath: Option<String>,
}

impl PackageUrl {
    /// The scheme of every package URL.
    pub const SCHEME: &'static str = "pkg";

    /// Parses a package URL from a string.
    ///
    /// The `pkg:` scheme is matched case-insensitively. The subpath, the
    /// qualifiers and the version are split off at the **last** `'#'`, `'?'`
    /// and `'@'` respectively, in that order, and what remains is split into
    /// the type, the namespace and the name at `'/'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a well-formed package URL.
    /// See [`ParseErrorKind`] for the possible causes.
    ///
    /// [`ParseErrorKind`]: crate::ParseErrorKind
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse::parse(s)
    }

    /// Creates a new builder for a package URL with the given type and name.
    pub fn builder(ty: impl Into<String>, name: impl Into<String>) -> Builder {
        Builder::new(ty, name)
    }

    /// Returns the scheme, which is always `"pkg"`.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        Self::SCHEME
    }

    /// Returns the lowercase type.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Returns the decoded namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the decoded name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the decoded version.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the qualifiers.
    #[must_use]
    pub fn qualifiers(&self) -> &Qualifiers {
        &self.qualifiers
    }

    /// Returns the decoded subpath.
    #[must_use]
    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }
}

impl FromStr for PackageUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PackageUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, ParseError> {
        Self::parse(s)
    }
}
