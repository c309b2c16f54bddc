use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::{header::CONTENT_TYPE, StatusCode};
use serde::de::DeserializeOwned;

#[allow(unused)]
pub struct TestResponse {
    response: Response,
}

#[allow(unused)]
impl TestResponse {
    pub fn new(response: impl IntoResponse) -> Self {
        TestResponse {
            response: response.into_response(),
        }
    }

    pub async fn bytes(self) -> Bytes {
        axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("failed to read body")
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.bytes().await).expect("failed to deserialize to json")
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}
