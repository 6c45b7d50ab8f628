//! HTTP client for the book API.

use std::time::Duration;

use reqwest::multipart::Form;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use shelf_core::error::{ProtocolError, ServerError, TransportError};
use shelf_core::{ApiUrl, Error, Result};

use super::endpoints::ErrorBody;

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API.
    pub fn new(api: ApiUrl, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("shelf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, api })
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET with query parameters.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// POST a JSON body.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST json");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// POST a multipart form.
    #[instrument(skip(self, form), fields(api = %self.api))]
    pub async fn post_multipart<R>(&self, path: &str, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST multipart");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// DELETE, ignoring any success body.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.api.endpoint(path);
        debug!(%url, "DELETE");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Decode a success body or turn a failure status into a [`ServerError`].
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(self.parse_error_response(response).await.into());
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ProtocolError::Malformed {
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ServerError {
        let status = response.status().as_u16();

        // Bodies are not always JSON (proxies, HTML error pages).
        match response.json::<ErrorBody>().await {
            Ok(body) => ServerError::new(status, body.message.filter(|m| !m.is_empty())),
            Err(_) => ServerError::new(status, None),
        }
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}
