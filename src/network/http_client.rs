// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

use super::{CancellationToken, NetworkError, NetworkResult};
use crate::{Error, Result};

/// A base URL where the API might be reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress {
    base_url: String,
}

impl ServiceAddress {
    /// Validates `base_url` as an absolute `http`/`https` URL. A trailing `/`
    /// is removed so that endpoint paths can be appended verbatim.
    pub fn parse(base_url: &str) -> NetworkResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url =
            Url::parse(trimmed).map_err(|_| NetworkError::UrlParseError(base_url.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(NetworkError::UrlParseError(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Plain-http address for `host`, as served by the local mock server.
    pub fn new_without_ssl(host: String, port: Option<u16>, endpoint: Option<String>) -> Self {
        let port = if let Some(port) = port {
            format!(":{port}")
        } else {
            "".to_string()
        };

        let endpoint = if let Some(endpoint) = endpoint {
            format!("/{}", endpoint.trim_matches('/'))
        } else {
            "".to_string()
        };

        Self {
            base_url: format!("http://{host}{port}{endpoint}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str, query: &[(String, String)]) -> NetworkResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|_| NetworkError::UrlParseError(raw))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl std::fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_url)
    }
}

/// Ordered, non-empty list of addresses. The primary is always tried first,
/// the fallbacks only after it failed, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCandidates {
    primary: ServiceAddress,
    fallbacks: Vec<ServiceAddress>,
}

impl EndpointCandidates {
    pub fn new(primary: ServiceAddress, fallbacks: Vec<ServiceAddress>) -> Self {
        Self { primary, fallbacks }
    }

    /// Parses every entry of `base_urls`, highest priority first.
    pub fn parse<S: AsRef<str>>(base_urls: &[S]) -> Result<Self> {
        let mut addresses = base_urls
            .iter()
            .map(|url| ServiceAddress::parse(url.as_ref()))
            .collect::<NetworkResult<Vec<_>>>()?
            .into_iter();
        let primary = addresses.next().ok_or_else(|| {
            Error::InvalidConfiguration("at least one candidate base URL is required".to_string())
        })?;
        Ok(Self {
            primary,
            fallbacks: addresses.collect(),
        })
    }

    pub fn primary(&self) -> &ServiceAddress {
        &self.primary
    }

    pub fn len(&self) -> usize {
        1 + self.fallbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceAddress> {
        std::iter::once(&self.primary).chain(self.fallbacks.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    /// Whether sending the same request twice leaves the server in the same
    /// state as sending it once. A `PATCH` here only sets fields.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, HttpMethod::Post)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Everything about a request except the address it is sent to.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: HttpMethod::Get,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            ..Self::get()
        }
    }

    pub fn patch(body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Patch,
            body: Some(body),
            ..Self::get()
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A successful (2xx) response, with the body already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    /// Base URL of the candidate that answered.
    pub base_url: String,
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Finds the first candidate that answers a request successfully.
///
/// Candidates are tried strictly in order, one at a time. Each attempt is
/// bounded by `attempt_timeout` (connect, headers and body). An attempt fails
/// on timeout, on any transport error, or on a non-2xx status; the first
/// success ends the scan. No candidate is retried within one call.
///
/// A `POST` only moves to the next candidate when the connection could not
/// be opened; after a timeout or an error status it may already have been
/// processed, so the scan stops there. Requests that cannot be built are
/// rejected before any candidate is contacted.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    candidates: EndpointCandidates,
    attempt_timeout: Duration,
    user_agent: String,
    client: Client,
}

impl EndpointResolver {
    pub fn new(
        candidates: EndpointCandidates,
        attempt_timeout: Duration,
        user_agent: String,
    ) -> NetworkResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            candidates,
            attempt_timeout,
            user_agent,
            client,
        })
    }

    pub fn candidates(&self) -> &EndpointCandidates {
        &self.candidates
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    pub fn resolve(&self, path: &str, options: &RequestOptions) -> NetworkResult<EndpointResponse> {
        self.scan(path, options, None)
    }

    /// Same as [`resolve`](EndpointResolver::resolve), but stops before the
    /// next attempt once `cancellation` is set.
    pub fn resolve_cancellable(
        &self,
        path: &str,
        options: &RequestOptions,
        cancellation: &CancellationToken,
    ) -> NetworkResult<EndpointResponse> {
        self.scan(path, options, Some(cancellation))
    }

    fn scan(
        &self,
        path: &str,
        options: &RequestOptions,
        cancellation: Option<&CancellationToken>,
    ) -> NetworkResult<EndpointResponse> {
        if !path.starts_with('/') {
            return Err(NetworkError::InvalidPath(path.to_string()));
        }
        validate_headers(&options.headers)?;

        check_cancellation(cancellation)?;
        let mut attempts = 1;
        let mut last = match self.try_candidate(&self.candidates.primary, path, options) {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        for address in &self.candidates.fallbacks {
            if !may_try_next(options.method, &last) {
                return Err(last);
            }
            check_cancellation(cancellation)?;
            attempts += 1;
            match self.try_candidate(address, path, options) {
                Ok(response) => return Ok(response),
                Err(e) => last = e,
            }
        }

        if !may_try_next(options.method, &last) {
            return Err(last);
        }

        Err(NetworkError::NoReachableEndpoint {
            attempts,
            last: Box::new(last),
        })
    }

    fn try_candidate(
        &self,
        address: &ServiceAddress,
        path: &str,
        options: &RequestOptions,
    ) -> NetworkResult<EndpointResponse> {
        debug!("Attempting to fetch from: {address}{path}");
        match self.attempt(address, path, options) {
            Ok(response) => {
                info!("Successfully connected to {address}");
                Ok(response)
            }
            Err(e) => {
                warn!("Failed to connect to {address}: {e}");
                Err(e)
            }
        }
    }

    fn attempt(
        &self,
        address: &ServiceAddress,
        path: &str,
        options: &RequestOptions,
    ) -> NetworkResult<EndpointResponse> {
        let url = address.url_for(path, &options.query)?;
        let mut request = self
            .client
            .request(options.method.into(), url.clone())
            .timeout(self.attempt_timeout)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::UnsuccessfulStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(EndpointResponse {
            base_url: address.base_url().to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body: response.text()?,
        })
    }
}

/// Rejects header names or values that could never be sent, before any
/// candidate is contacted.
fn validate_headers(headers: &[(String, String)]) -> NetworkResult<()> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| NetworkError::InvalidHeader(name.clone()))?;
        HeaderValue::from_str(value).map_err(|_| NetworkError::InvalidHeader(name.clone()))?;
    }
    Ok(())
}

/// The request never left this process: the next candidate would fail the
/// same way.
fn is_local_failure(error: &NetworkError) -> bool {
    match error {
        NetworkError::UrlParseError(_) => true,
        NetworkError::ReqwestError(e) => e.is_builder(),
        _ => false,
    }
}

/// A request that may have reached the server is only repeated elsewhere
/// when repeating it is harmless. Non-idempotent requests move on only when
/// the connection itself could not be opened.
fn may_try_next(method: HttpMethod, last: &NetworkError) -> bool {
    if is_local_failure(last) {
        return false;
    }
    if method.is_idempotent() {
        return true;
    }
    matches!(last, NetworkError::ReqwestError(e) if e.is_connect())
}

fn check_cancellation(cancellation: Option<&CancellationToken>) -> NetworkResult<()> {
    match cancellation {
        Some(token) if token.is_cancelled() => {
            debug!("Endpoint scan cancelled by caller");
            Err(NetworkError::Cancelled)
        }
        _ => Ok(()),
    }
}
