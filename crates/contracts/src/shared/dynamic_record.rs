use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Row of a list endpoint whose columns are not known at compile time.
///
/// Field order follows the server payload (`serde_json` is built with
/// `preserve_order`), so the first record of a page can serve as the column
/// template for the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRecord(Map<String, Value>);

impl DynamicRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, keeps insertion order.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// True when the record carries `field`, even with a `null` value.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Text shown in a table cell for `field`.
    ///
    /// Strings are returned as-is, other scalars through their JSON text.
    /// A missing or `null` field yields `None`.
    pub fn display(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_order_follows_payload() {
        let record: DynamicRecord =
            serde_json::from_str(r#"{"zeta":1,"alpha":"a","mid":true}"#).unwrap();
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_display_scalars() {
        let record = DynamicRecord::new()
            .with("name", "Hall A")
            .with("capacity", 120)
            .with("active", true)
            .with("note", Value::Null);

        assert_eq!(record.display("name").as_deref(), Some("Hall A"));
        assert_eq!(record.display("capacity").as_deref(), Some("120"));
        assert_eq!(record.display("active").as_deref(), Some("true"));
        assert_eq!(record.display("note"), None);
        assert_eq!(record.display("missing"), None);
    }

    #[test]
    fn test_has_field_counts_null_as_present() {
        let record = DynamicRecord::new()
            .with("a", json!(null))
            .with("b", json!(""));
        assert!(record.has_field("a"));
        assert!(record.has_field("b"));
        assert!(!record.has_field("c"));
    }
}
