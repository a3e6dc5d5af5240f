//! Single-request HTTP layer.
//!
//! One request in, one parsed JSON value (or classified error) out. No
//! retries, no caching, no shared mutable state; any number of requests may
//! be in flight concurrently.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;

/// Stateless HTTP transport with the credential headers baked in.
///
/// Cloning is cheap: the underlying reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
    api_pin: String,
}

impl Transport {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_pin: config.api_pin.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one round trip.
    ///
    /// `query` pairs are appended as-is; callers omit absent values before
    /// getting here. Returns `Ok(None)` for a 204 response, `Ok(Some(json))`
    /// for any other success, and a classified [`Error`] otherwise.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("API-Key", &self.api_key)
            .header("API-Pin", &self.api_pin);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        debug!(%method, %url, %status, "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::classify(status.as_u16(), &text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let value = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(Some(value))
    }
}

/// Decode a response that must carry a body.
pub(crate) fn expect_json<T: DeserializeOwned>(value: Option<Value>) -> Result<T, Error> {
    let value = value.ok_or_else(|| Error::Decode("expected a response body".to_string()))?;
    serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> Transport {
        Transport::new(&Config::new("key", "pin").with_base_url(server.uri()))
    }

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let config = Config::new("key", "pin").with_base_url("http://localhost:8000/api/");
        let transport = Transport::new(&config);
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
    }

    #[tokio::test]
    async fn test_no_content_response_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/character/char-1/"))
            .and(header("API-Key", "key"))
            .and(header("API-Pin", "pin"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let body = transport_for(&server)
            .request(Method::DELETE, "/character/char-1/", &[], None)
            .await
            .expect("delete succeeds");
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_success_body_is_parsed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/character/char-1/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "char-1", "name": "Aldric"})),
            )
            .mount(&server)
            .await;

        let body = transport_for(&server)
            .request(Method::GET, "/character/char-1/", &[], None)
            .await
            .expect("get succeeds");
        assert_eq!(body, Some(json!({"id": "char-1", "name": "Aldric"})));
    }

    #[tokio::test]
    async fn test_failure_body_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/character/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let error = transport_for(&server)
            .request(Method::GET, "/character/missing/", &[], None)
            .await
            .expect_err("must fail");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "API Error 404: Not found.");
    }

    #[test]
    fn test_expect_json_rejects_missing_body() {
        let result: Result<Value, Error> = expect_json(None);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_expect_json_decodes_value() {
        let value = serde_json::json!({"success": true});
        let decoded: Value = expect_json(Some(value.clone())).expect("decode");
        assert_eq!(decoded, value);
    }
}
