use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use ideas_board_shared::wire::parse_list_response;
use ideas_board_shared::{FetchError, ListPage, RequestDescriptor, Transport};

#[cfg(feature = "mock")]
use crate::models;

/// Transport used by the ideas page in this build.
#[cfg(not(feature = "mock"))]
pub type ApiTransport = HttpTransport;
#[cfg(feature = "mock")]
pub type ApiTransport = MockTransport;

#[cfg(not(feature = "mock"))]
pub fn transport() -> ApiTransport {
    HttpTransport::new(crate::config::API_BASE)
}

#[cfg(feature = "mock")]
pub fn transport() -> ApiTransport {
    MockTransport
}

/// Listing requests over `fetch`, one GET per descriptor.
#[cfg(not(feature = "mock"))]
pub struct HttpTransport {
    base: String,
}

#[cfg(not(feature = "mock"))]
impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
        }
    }
}

/// 获取 ideas 列表（分页 + 排序 + 图片关联）
#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<ListPage, FetchError> {
        let url = request
            .to_url(&self.base)
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = Request::get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Malformed(format!("{:?}", e)))?;

        parse_list_response(&body)
    }
}

/// Serves generated ideas so the page runs without the backend.
#[cfg(feature = "mock")]
pub struct MockTransport;

#[cfg(feature = "mock")]
#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<ListPage, FetchError> {
        Ok(models::get_mock_page(request))
    }
}
