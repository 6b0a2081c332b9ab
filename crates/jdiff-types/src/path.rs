use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a value inside a JSON document.
///
/// Object keys are joined with `.` and array elements use `[index]`, so the
/// third contact's email of a customer is `customer.contacts[2].email`. The
/// document root is the empty path.
///
/// Keys are not escaped: a key containing `.` or `[` produces a path that
/// collides with a nested one.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPath(String);

impl JsonPath {
    /// The document root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the member `key` of the object at this path.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Path of element `index` of the array at this path.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonPath({:?})", self.0)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JsonPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JsonPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for JsonPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = JsonPath::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "");
    }

    #[test]
    fn key_at_root_has_no_leading_dot() {
        assert_eq!(JsonPath::root().key("customer").as_str(), "customer");
    }

    #[test]
    fn nested_keys_and_indices() {
        let path = JsonPath::root()
            .key("customer")
            .key("contacts")
            .index(2)
            .key("email");
        assert_eq!(path.as_str(), "customer.contacts[2].email");
        assert!(!path.is_root());
    }

    #[test]
    fn index_at_root() {
        assert_eq!(JsonPath::root().index(0).as_str(), "[0]");
        assert_eq!(JsonPath::root().index(0).index(3).as_str(), "[0][3]");
    }

    #[test]
    fn display_matches_str() {
        let path = JsonPath::from("a.b[1]");
        assert_eq!(format!("{path}"), "a.b[1]");
    }

    #[test]
    fn serializes_as_plain_string() {
        let path = JsonPath::from("stops[0].location");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"stops[0].location\"");
        let parsed: JsonPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path);
    }
}
