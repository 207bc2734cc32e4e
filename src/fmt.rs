use crate::{
    pct_enc::{encoder::*, write_encoded},
    PackageUrl, Qualifiers,
};
use core::fmt::{self, Write};

/// Writes the canonical string `pkg:type/namespace/name@version?qualifiers#subpath`.
impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The type only ever holds characters that need no encoding.
        write!(f, "{}:{}/", Self::SCHEME, self.ty)?;

        if let Some(namespace) = &self.namespace {
            write_encoded::<Namespace>(f, namespace)?;
            f.write_char('/')?;
        }
        write_encoded::<Name>(f, &self.name)?;

        if let Some(version) = &self.version {
            f.write_char('@')?;
            write_encoded::<Version>(f, version)?;
        }

        if !self.qualifiers.is_empty() {
            write!(f, "?{}", self.qualifiers)?;
        }

        if let Some(subpath) = &self.subpath {
            f.write_char('#')?;
            write_encoded::<Subpath>(f, subpath)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageUrl")
            .field("type", &self.ty)
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("qualifiers", &self.qualifiers)
            .field("subpath", &self.subpath)
            .finish()
    }
}

/// Writes the qualifiers as `key=value` pairs joined by `'&'`, sorted by key.
impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char('&')?;
            }
            // Keys are restricted to characters that need no encoding.
            write!(f, "{key}=")?;
            write_encoded::<QualifierValue>(f, value)?;
        }
        Ok(())
    }
}
