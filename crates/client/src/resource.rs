//! Generic per-family element resource.
//!
//! One [`Resource`] instance covers one element family and exposes the five
//! CRUD operations against `/{family}/`. The typed element structs carry the
//! data; the resource handles paths, query building, body preparation and
//! response decoding.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use onlyworlds_domain::ElementType;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::page::Page;
use crate::prepare::prepare_body;
use crate::transport::{expect_json, Transport};

/// Optional query parameters for list operations.
///
/// Absent values are omitted from the query string entirely. `filters`
/// carries family-specific parameters such as `supertype` or `world`; it is
/// a sorted map so the emitted query order is stable.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub ordering: Option<String>,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            query.push(("ordering".to_string(), ordering.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        for (key, value) in &self.filters {
            query.push((key.clone(), value.clone()));
        }
        query
    }
}

/// CRUD access to one element family.
pub struct Resource<T> {
    transport: Transport,
    element: ElementType,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Resource<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(transport: Transport, element: ElementType) -> Self {
        Self {
            transport,
            element,
            _marker: PhantomData,
        }
    }

    /// The element family this resource operates on.
    pub fn element_type(&self) -> ElementType {
        self.element
    }

    fn collection_path(&self) -> String {
        format!("/{}/", self.element.as_str())
    }

    fn item_path(&self, id: &str) -> String {
        format!("/{}/{}/", self.element.as_str(), id)
    }

    /// List elements of this family, normalized to a [`Page`].
    pub async fn list(&self, options: &ListOptions) -> Result<Page<T>, Error> {
        let value = self
            .transport
            .request(Method::GET, &self.collection_path(), &options.to_query(), None)
            .await?;
        let value = value.ok_or_else(|| Error::Decode("expected a list body".to_string()))?;
        Page::from_value(value)
    }

    /// Fetch one element by identifier.
    pub async fn get(&self, id: &str) -> Result<T, Error> {
        let value = self
            .transport
            .request(Method::GET, &self.item_path(id), &[], None)
            .await?;
        expect_json(value)
    }

    /// Create an element and return the stored record.
    pub async fn create(&self, input: &T) -> Result<T, Error> {
        let body = self.encode(input)?;
        let value = self
            .transport
            .request(Method::POST, &self.collection_path(), &[], Some(&body))
            .await?;
        expect_json(value)
    }

    /// Apply a partial update and return the updated record.
    ///
    /// Only fields present in `input` are sent, so absent fields are left
    /// unchanged on the server.
    pub async fn update(&self, id: &str, input: &T) -> Result<T, Error> {
        let body = self.encode(input)?;
        let value = self
            .transport
            .request(Method::PATCH, &self.item_path(id), &[], Some(&body))
            .await?;
        expect_json(value)
    }

    /// Delete one element. Succeeds silently on a 204.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.transport
            .request(Method::DELETE, &self.item_path(id), &[], None)
            .await?;
        debug!(element = %self.element, id, "deleted element");
        Ok(())
    }

    fn encode(&self, input: &T) -> Result<Value, Error> {
        let body = serde_json::to_value(input).map_err(|e| Error::Encode(e.to_string()))?;
        Ok(prepare_body(self.element, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resource_for(server: &MockServer, element: ElementType) -> Resource<Value> {
        let config = Config::new("key", "pin").with_base_url(server.uri());
        Resource::new(Transport::new(&config), element)
    }

    #[tokio::test]
    async fn test_delete_of_absent_id_surfaces_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/character/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let error = resource_for(&server, ElementType::Character)
            .delete("missing")
            .await
            .expect_err("must fail");
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_list_query_reaches_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/character/"))
            .and(query_param("limit", "10"))
            .and(query_param("supertype", "ruler"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "char-1"}])))
            .mount(&server)
            .await;

        let options = ListOptions::new().limit(10).filter("supertype", "ruler");
        let page = resource_for(&server, ElementType::Character)
            .list(&options)
            .await
            .expect("list succeeds");
        assert_eq!(page.count, 1);
        assert!(page.next.is_none());
    }

    #[test]
    fn test_default_options_emit_no_query() {
        assert!(ListOptions::new().to_query().is_empty());
    }

    #[test]
    fn test_present_options_are_emitted_in_order() {
        let options = ListOptions::new()
            .limit(10)
            .offset(20)
            .ordering("-name")
            .search("harbor");
        assert_eq!(
            options.to_query(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "20".to_string()),
                ("ordering".to_string(), "-name".to_string()),
                ("search".to_string(), "harbor".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let options = ListOptions::new().limit(5);
        assert_eq!(
            options.to_query(),
            vec![("limit".to_string(), "5".to_string())]
        );
    }

    #[test]
    fn test_filters_follow_standard_parameters_sorted() {
        let options = ListOptions::new()
            .limit(1)
            .filter("supertype", "ruler")
            .filter("world", "w-1");
        assert_eq!(
            options.to_query(),
            vec![
                ("limit".to_string(), "1".to_string()),
                ("supertype".to_string(), "ruler".to_string()),
                ("world".to_string(), "w-1".to_string()),
            ]
        );
    }
}
