//! JSON-over-HTTP form transport
//!
//! reqwest on desktop, gloo-net in the browser. Both POST the form data as a
//! JSON object and map non-2xx answers to [`SubmitError::Status`].

use iwe_domain::FormData;

use crate::ports::outbound::{FormSubmitPort, SubmitError, SubmitReceipt};

/// Form transport talking to a real endpoint
#[derive(Clone)]
pub struct HttpFormSubmitter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpFormSubmitter {
    /// `base_url` is prepended to relative endpoints; empty means same origin
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Absolute URL for an endpoint
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        if self.base_url.is_empty() {
            return endpoint.to_string();
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

/// An empty or non-JSON 2xx body still counts as accepted
fn parse_receipt(body: &str) -> SubmitReceipt {
    serde_json::from_str(body).unwrap_or_else(|_| SubmitReceipt::accepted())
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl FormSubmitPort for HttpFormSubmitter {
    async fn send(&self, endpoint: &str, data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        let url = self.url_for(endpoint);
        tracing::debug!(url = %url, "POST form");

        let response = self
            .client
            .post(&url)
            .json(data)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_receipt(&body))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl FormSubmitPort for HttpFormSubmitter {
    async fn send(&self, endpoint: &str, data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        use gloo_net::http::Request;

        let url = self.url_for(endpoint);
        tracing::debug!(url = %url, "POST form");

        let request = Request::post(&url)
            .json(data)
            .map_err(|e| SubmitError::Serialize(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SubmitError::Status { status, body });
        }

        Ok(parse_receipt(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_relative_endpoint() {
        let client = HttpFormSubmitter::new("https://iwe.example/");
        assert_eq!(
            client.url_for("/api/contact"),
            "https://iwe.example/api/contact"
        );
    }

    #[test]
    fn test_url_for_same_origin() {
        let client = HttpFormSubmitter::new("");
        assert_eq!(client.url_for("/api/newsletter"), "/api/newsletter");
    }

    #[test]
    fn test_url_for_absolute_endpoint_is_kept() {
        let client = HttpFormSubmitter::new("https://iwe.example");
        assert_eq!(
            client.url_for("https://forms.example/submit"),
            "https://forms.example/submit"
        );
    }

    #[test]
    fn test_parse_receipt() {
        assert!(!parse_receipt(r#"{"success": false}"#).success);
        assert_eq!(parse_receipt(""), SubmitReceipt::accepted());
        assert_eq!(parse_receipt("<html>ok</html>"), SubmitReceipt::accepted());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod transport {
        use super::*;
        use mockito::Matcher;

        fn contact_data() -> FormData {
            FormData::new()
                .with("name", "Anna")
                .with("email", "anna@example.com")
        }

        #[tokio::test]
        async fn test_send_posts_json_body() {
            let mut server = mockito::Server::new_async().await;
            let endpoint = server
                .mock("POST", "/api/contact")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(serde_json::json!({
                    "name": "Anna",
                    "email": "anna@example.com"
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"success": true}"#)
                .expect(1)
                .create_async()
                .await;

            let client = HttpFormSubmitter::new(&server.url());
            let receipt = client
                .send("/api/contact", &contact_data())
                .await
                .expect("accepted");

            assert_eq!(receipt, SubmitReceipt::accepted());
            endpoint.assert_async().await;
        }

        #[tokio::test]
        async fn test_send_maps_error_status() {
            let mut server = mockito::Server::new_async().await;
            let _endpoint = server
                .mock("POST", "/api/contact")
                .with_status(503)
                .with_body("maintenance")
                .create_async()
                .await;

            let client = HttpFormSubmitter::new(&server.url());
            let err = client
                .send("/api/contact", &contact_data())
                .await
                .expect_err("503 is a failure");

            assert_eq!(
                err,
                SubmitError::Status {
                    status: 503,
                    body: "maintenance".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_send_without_listener_is_transport_error() {
            let client = HttpFormSubmitter::new("http://127.0.0.1:1");
            let err = client
                .send("/api/contact", &contact_data())
                .await
                .expect_err("nothing listens on port 1");

            assert!(matches!(err, SubmitError::Transport(_)));
        }
    }
}
