use crate::api::ApiError;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT},
    Client, Method, Response,
};
use serde::{de::DeserializeOwned, Serialize};

/// JSON-over-HTTP transport shared by the API clients.
///
/// Attaches the bearer token and decodes both success bodies and the API's
/// error envelope. No timeout is set beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Http {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| ApiError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let res = self.client.get(self.url(path)).headers(self.headers()?).query(query).send().await?;
        Self::decode(res).await
    }

    pub async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method.clone(), self.url(path)).headers(self.headers()?);
        if let Some(body) = body {
            request = request.json(body);
        }
        tracing::debug!(%method, path, "sending request");
        let res = request.send().await?;
        Self::decode(res).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::DELETE, path, None).await
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }
        let body = res.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "request failed");
        Err(ApiError::from_response(status, &body))
    }
}
