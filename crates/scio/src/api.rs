//! HTTP client plumbing used by the frontend to talk to the backend API.

use gloo_net::http::{Request, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

type ApiResult<T> = Result<T, ApiError>;

fn check_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        400 => Err(ApiError::BadRequest(format!("Bad request to {}", endpoint))),
        404 => Err(ApiError::NotFound(format!("{} not found", endpoint))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn parse_json<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    check_status(response, endpoint)?
        .json::<T>()
        .await
        .map_err(ApiError::ParseError)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

/// A thin JSON client rooted at the backend's base URL.
pub struct HttpApiClient {
    root_url: String,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = Request::get(&self.url(endpoint))
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        parse_json(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = Request::post(&self.url(endpoint))
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        parse_json(response, endpoint).await
    }
}
