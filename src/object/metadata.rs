use std::collections::BTreeMap;
use std::sync::Arc;

/// A metadata value attached to an [`Object3d`](super::Object3d).
///
/// Nested maps are reference counted: copying a [`Metadata`] shares them
/// instead of duplicating them.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Map(Arc<Metadata>),
}

impl MetadataValue {
    /// The number, if this is a `Number`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a `Text`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// The flag, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The nested mapping, if this is a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&Metadata> {
        match self {
            Self::Map(v) => Some(v.as_ref()),
            _ => None,
        }
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for MetadataValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(v: Metadata) -> Self {
        Self::Map(Arc::new(v))
    }
}

impl From<Arc<Metadata>> for MetadataValue {
    fn from(v: Arc<Metadata>) -> Self {
        Self::Map(v)
    }
}

/// String-keyed annotations carried alongside a solid.
///
/// ```
/// use solidkit::object::Metadata;
///
/// let meta = Metadata::from_iter([("name", "bracket")]).with("rev", 2);
/// assert_eq!(meta.get("name").and_then(|v| v.as_str()), Some("bracket"));
/// assert_eq!(meta.get("rev").and_then(|v| v.as_f64()), Some(2.0));
/// assert!(meta.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy with `key` set to `value`.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        let mut copy = self.clone();
        copy.entries.insert(key.into(), value.into());
        copy
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
