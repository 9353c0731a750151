//! # Property Paths
//!
//! A path locates a field inside a (possibly nested) value. Paths are
//! rendered as dot-joined strings, which is the key space of every
//! per-field error mapping. The root path renders as the empty string.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object property access.
    Key(String),
    /// List element access.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSegment::Key(k) => serializer.serialize_str(k),
            PathSegment::Index(i) => serializer.serialize_u64(*i as u64),
        }
    }
}

/// Join path segments with `.`. An empty path yields `""`.
pub fn join_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&seg.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty_string() {
        assert_eq!(join_path(&[]), "");
    }

    #[test]
    fn joins_keys_and_indices() {
        let path = vec![
            PathSegment::from("pets"),
            PathSegment::from(1usize),
            PathSegment::from("name"),
        ];
        assert_eq!(join_path(&path), "pets.1.name");
    }

    #[test]
    fn single_segment_has_no_separator() {
        assert_eq!(join_path(&["name".into()]), "name");
    }
}
