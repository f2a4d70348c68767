use serde::{Serialize, de::DeserializeOwned};

use crate::error::ClientError;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A thin JSON API client. Endpoint paths are relative to `{address}/api/`.
pub struct Api {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl Api {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ReqwestResult {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// HTTP verbs. Each returns the deserialized response body, or a
/// `ClientError` on non-2xx status or network failure.
impl Api {
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let response =
            self.send(self.inner_client.get(self.format_url(path))).await?;
        ok_body(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.inner_client.post(self.format_url(path)).json(body))
            .await?;
        ok_body(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.inner_client.put(self.format_url(path)).json(body))
            .await?;
        ok_body(response).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.inner_client.patch(self.format_url(path)).json(body))
            .await?;
        ok_body(response).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.inner_client.delete(self.format_url(path)))
            .await?;
        ok_body(response).await
    }

    /// POST with no request or response body, for endpoints like `logout`
    /// that only signal success through their status code.
    pub async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
        let response =
            self.send(self.inner_client.post(self.format_url(path))).await?;
        ok_empty(response).await
    }
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
