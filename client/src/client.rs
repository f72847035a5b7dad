//! HTTP transport for API communication.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use inkpost_protocol::file::FileSource;
use inkpost_protocol::params::to_pairs;
use inkpost_protocol::{HasFileParams, ToParamMap};

use crate::config::Config;
use crate::error::Error;

/// API client.
///
/// Cheap to clone; the underlying connection pool and credentials are
/// shared read-only, so one instance can serve concurrent callers. Each
/// operation issues exactly one HTTP call with no retry and no ordering
/// guarantee relative to other in-flight calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a client from config. The base URL and API version are
    /// fixed for the lifetime of the client.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.versioned_base_url(),
            api_key: config.api_key,
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, Error> {
        tracing::debug!(method = "GET", path, "dispatching request");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .basic_auth(&self.api_key, None::<&str>)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request carrying a request's parameter map.
    ///
    /// URL-backed file parameters join the form as plain text fields; any
    /// upload-backed file parameter switches the whole body to multipart.
    pub(crate) async fn post_params<T, R>(&self, path: &str, request: &R) -> Result<T, Error>
    where
        T: DeserializeOwned,
        R: ToParamMap + HasFileParams,
    {
        let params = request.to_param_map();
        let files = request.file_params();
        tracing::debug!(
            method = "POST",
            path,
            files = files.len(),
            "dispatching request"
        );

        let builder = self
            .http
            .post(self.url(path))
            .basic_auth(&self.api_key, None::<&str>);

        let response = if files.iter().any(|f| f.is_upload()) {
            let mut form = reqwest::multipart::Form::new();
            for (key, value) in to_pairs(&params) {
                form = form.text(key, value);
            }
            for file in files {
                match file.source() {
                    FileSource::Url(url) => {
                        form = form.text(file.name().to_string(), url.clone());
                    }
                    FileSource::Path(path) => {
                        let bytes = tokio::fs::read(path).await?;
                        let file_name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| "upload".to_string());
                        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                        form = form.part(file.name().to_string(), part);
                    }
                }
            }
            builder.multipart(form).send().await?
        } else {
            let mut pairs = to_pairs(&params);
            for file in files {
                if let FileSource::Url(url) = file.source() {
                    pairs.push((file.name().to_string(), url.clone()));
                }
            }
            builder.form(&pairs).send().await?
        };

        self.handle_response(response).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        tracing::debug!(method = "DELETE", path, "dispatching request");
        let response = self
            .http
            .delete(self.url(path))
            .basic_auth(&self.api_key, None::<&str>)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a successful or error response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        if response.status().is_success() {
            response.json().await.map_err(Error::Transport)
        } else {
            self.handle_error(response).await
        }
    }

    /// Handle an error response, tolerating a body that isn't the
    /// documented error shape.
    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, Error> {
        let status = response.status().as_u16();

        let body: ApiErrorBody = response.json().await.unwrap_or_else(|_| ApiErrorBody {
            error: ApiErrorDetail {
                message: "unknown error".to_string(),
                status_code: None,
            },
        });

        tracing::error!(status, message = %body.error.message, "API returned an error");
        Err(Error::api(status, body.error.message, body.error.status_code))
    }
}

/// API error response structure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    status_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let config = Config::new("test_key").base_url("http://localhost:8080");
        let client = Client::new(config).unwrap();
        assert_eq!(client.url("/jobs"), "http://localhost:8080/v1/jobs");
    }
}
