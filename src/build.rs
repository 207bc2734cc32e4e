//! Module for building package URLs from their components.

use crate::{
    error::{ParseError, Result},
    grammar, normalize,
    qualifiers::Qualifiers,
    PackageUrl,
};
use alloc::string::String;

/// Indexes where the components start in a parsed input, used to locate errors.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Offsets {
    pub(crate) ty: usize,
    pub(crate) namespace: usize,
    pub(crate) name: usize,
    pub(crate) subpath: usize,
}

/// A builder for package URLs.
///
/// This struct is created by [`PackageUrl::builder`]. Components are taken
/// decoded: a `'%'` in a name is a literal percent sign, not an escape.
///
/// The builder runs the same validation and normalization as
/// [`PackageUrl::parse`], so both routes agree on every component.
///
/// # Examples
///
/// ```
/// use purl_canon::PackageUrl;
///
/// let purl = PackageUrl::builder("GitHub", "Purl-Spec")
///     .namespace("Package-URL")
///     .version("v1.0")
///     .subpath("/tests//data/")
///     .build()?;
///
/// assert_eq!(purl.ty(), "github");
/// assert_eq!(purl.namespace(), Some("package-url"));
/// assert_eq!(purl.name(), "purl-spec");
/// assert_eq!(purl.subpath(), Some("tests/data"));
/// assert_eq!(purl.to_string(), "pkg:github/package-url/purl-spec@v1.0#tests/data");
/// # Ok::<_, purl_canon::ParseError>(())
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Builder {
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: Qualifiers,
    subpath: Option<String>,
}

impl Builder {
    pub(crate) fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            namespace: None,
            name: name.into(),
            version: None,
            qualifiers: Qualifiers::new(),
            subpath: None,
        }
    }

    /// Sets the namespace, with segments separated by `'/'`.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the version.
    ///
    /// An empty version is the same as no version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into()).filter(|v| !v.is_empty());
        self
    }

    /// Sets the qualifiers, replacing any previously set.
    pub fn qualifiers(mut self, qualifiers: Qualifiers) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    /// Sets the subpath.
    ///
    /// Empty segments are dropped, so the subpath may end up absent.
    pub fn subpath(mut self, subpath: impl Into<String>) -> Self {
        self.subpath = Some(subpath.into());
        self
    }

    /// Builds the package URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the type is invalid, the namespace has an empty segment,
    /// the name is empty, or a subpath segment is `"."` or `".."`.
    /// The error index is always `0`.
    pub fn build(self) -> Result<PackageUrl> {
        self.build_at(&Offsets::default())
    }

    pub(crate) fn build_at(self, at: &Offsets) -> Result<PackageUrl> {
        let located = |offset: usize| move |e: ParseError| e.at(offset);

        grammar::check_type(&self.ty).map_err(located(at.ty))?;
        let ty = self.ty.to_ascii_lowercase();

        let namespace = match self.namespace {
            Some(namespace) => {
                grammar::check_namespace(&namespace).map_err(located(at.namespace))?;
                Some(normalize::namespace(&ty, &namespace))
            }
            None => None,
        };

        grammar::check_name(&self.name).map_err(located(at.name))?;
        let name = normalize::name(&ty, &self.name);

        let subpath = match self.subpath {
            Some(subpath) => normalize::subpath(&subpath).map_err(located(at.subpath))?,
            None => None,
        };

        Ok(PackageUrl {
            ty,
            namespace,
            name,
            version: self.version,
            qualifiers: self.qualifiers,
            subpath,
        })
    }
}
