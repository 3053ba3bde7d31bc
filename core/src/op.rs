//! `StringMapOp` — operator tags for string-map predicates

use crate::FilterError;
use std::fmt;
use std::str::FromStr;

/// The comparison a [`StringMapPredicate`](crate::StringMapPredicate) applies.
///
/// Each op has a canonical tag used in rendering and configuration:
///
/// | Op           | Tag                   |
/// |--------------|-----------------------|
/// | `HasKey`     | `stringmapcontains`   |
/// | `Equals`     | `stringmapequals`     |
/// | `StartsWith` | `stringmapstartswith` |
///
/// Parsing ([`FromStr`], serde) only ever yields the three supported ops.
/// [`StringMapOp::Unrecognized`] exists so that a predicate assembled by hand
/// with a bad tag still evaluates (to `false`) instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringMapOp {
    /// Passes if the map has the key, whatever its value.
    HasKey,
    /// Passes if the key maps to the value. Absent and empty values count as
    /// [`UNALLOCATED_SUFFIX`](crate::UNALLOCATED_SUFFIX).
    Equals,
    /// Passes if the key is present and its value starts with the prefix.
    StartsWith,
    /// A tag outside the supported set. Evaluating it is a filter
    /// implementation error.
    Unrecognized(String),
}

impl StringMapOp {
    /// All supported ops, in tag order.
    pub const SUPPORTED: [Self; 3] = [Self::HasKey, Self::Equals, Self::StartsWith];

    /// The canonical tag for this op.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::HasKey => "stringmapcontains",
            Self::Equals => "stringmapequals",
            Self::StartsWith => "stringmapstartswith",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Returns `true` for the three supported ops.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for StringMapOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stringmapcontains" => Ok(Self::HasKey),
            "stringmapequals" => Ok(Self::Equals),
            "stringmapstartswith" => Ok(Self::StartsWith),
            other => Err(FilterError::UnknownOp {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StringMapOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StringMapOp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StringMapOp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
