use crate::{PackageUrl, Qualifiers};
use alloc::{collections::BTreeMap, string::String};
use core::fmt;
use serde::{
    de::{self, value::MapAccessDeserializer, MapAccess, Visitor},
    ser::{SerializeMap, SerializeStruct},
    Deserialize, Deserializer, Serialize, Serializer,
};

impl Serialize for Qualifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Qualifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Qualifiers::try_from_iter(map)
            .map_err(|e| de::Error::custom(format_args!("invalid qualifiers: {e}")))
    }
}

/// Serializes the components, with absent ones and empty qualifiers as `null`.
impl Serialize for PackageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let qualifiers = Some(&self.qualifiers).filter(|q| !q.is_empty());

        let mut s = serializer.serialize_struct("PackageUrl", 6)?;
        s.serialize_field("type", &self.ty)?;
        s.serialize_field("namespace", &self.namespace)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("version", &self.version)?;
        s.serialize_field("qualifiers", &qualifiers)?;
        s.serialize_field("subpath", &self.subpath)?;
        s.end()
    }
}

#[derive(Deserialize)]
struct Fields {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    namespace: Option<String>,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    qualifiers: Option<Qualifiers>,
    #[serde(default)]
    subpath: Option<String>,
}

struct PackageUrlVisitor;

impl<'de> Visitor<'de> for PackageUrlVisitor {
    type Value = PackageUrl;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a package URL string or a map of its components")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<PackageUrl, E> {
        PackageUrl::parse(s)
            .map_err(|e| E::custom(format_args!("failed to parse {s:?} as package URL: {e}")))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<PackageUrl, A::Error> {
        let fields = Fields::deserialize(MapAccessDeserializer::new(map))?;

        let mut builder = PackageUrl::builder(fields.ty, fields.name);
        if let Some(namespace) = fields.namespace {
            builder = builder.namespace(namespace);
        }
        if let Some(version) = fields.version {
            builder = builder.version(version);
        }
        if let Some(qualifiers) = fields.qualifiers {
            builder = builder.qualifiers(qualifiers);
        }
        if let Some(subpath) = fields.subpath {
            builder = builder.subpath(subpath);
        }
        builder
            .build()
            .map_err(|e| de::Error::custom(format_args!("invalid package URL components: {e}")))
    }
}

/// Deserializes from a package URL string or from a map of the components.
impl<'de> Deserialize<'de> for PackageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PackageUrlVisitor)
    }
}
