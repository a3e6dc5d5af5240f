//! Paged-collection normalization for list responses.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// The canonical shape of every list response.
///
/// The service has returned both bare arrays and `{count, next, previous,
/// results}` objects from list endpoints over time; both normalize to this.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Normalize a raw list response.
    ///
    /// A bare array becomes a page with `count` equal to its length and no
    /// cursors; an object is taken to already be in paged shape.
    pub(crate) fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Array(items) => {
                let results = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<T>, _>>()
                    .map_err(|e| Error::Decode(e.to_string()))?;
                Ok(Page {
                    count: results.len() as u64,
                    next: None,
                    previous: None,
                    results,
                })
            }
            other => serde_json::from_value(other).map_err(|e| Error::Decode(e.to_string())),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_is_wrapped_with_count() {
        let raw = json!([{"a": 1}, {"a": 2}, {"a": 3}]);
        let page: Page<Value> = Page::from_value(raw).expect("normalize");
        assert_eq!(page.count, 3);
        assert_eq!(page.len(), 3);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_empty_array_yields_empty_page() {
        let page: Page<Value> = Page::from_value(json!([])).expect("normalize");
        assert_eq!(page.count, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_paged_object_passes_through_unchanged() {
        let raw = json!({
            "count": 42,
            "next": "http://example.test/character/?offset=10",
            "previous": null,
            "results": [{"a": 1}]
        });
        let page: Page<Value> = Page::from_value(raw).expect("normalize");
        assert_eq!(page.count, 42);
        assert_eq!(
            page.next.as_deref(),
            Some("http://example.test/character/?offset=10")
        );
        assert!(page.previous.is_none());
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_malformed_object_is_a_decode_error() {
        let result: Result<Page<Value>, Error> = Page::from_value(json!({"nope": true}));
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
