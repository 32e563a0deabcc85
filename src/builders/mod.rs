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

use crate::client::configuration::validate_timeout;
use crate::network::EndpointCandidates;
use crate::{ClientConfig, GroomingApiClient, OfflineMode, Result};

pub trait ClientBuilder {
    /// Creates and returns the [`GroomingApiClient`]
    fn build(self) -> Result<GroomingApiClient>;
}

/// A [`GroomingApiClient`] builder starting from the default configuration.
///
/// Base URLs are validated when the client is built, so the builder methods
/// themselves never fail.
#[derive(Debug, Default)]
pub struct GroomingApiClientBuilder {
    base_urls: Option<Vec<String>>,
    attempt_timeout: Option<Duration>,
    user_agent: Option<String>,
    offline_mode: Option<OfflineMode>,
}

impl GroomingApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate base URLs, highest priority first.
    ///
    /// # Arguments
    ///
    /// * `base_urls` - Primary URL first, then the fallbacks in the order they must be tried.
    pub fn base_urls<S: AsRef<str>>(mut self, base_urls: &[S]) -> Self {
        self.base_urls = Some(base_urls.iter().map(|u| u.as_ref().to_string()).collect());
        self
    }

    pub fn attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = Some(attempt_timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn offline_mode(mut self, offline_mode: OfflineMode) -> Self {
        self.offline_mode = Some(offline_mode);
        self
    }

    /// Validates the settings and returns the resulting [`ClientConfig`].
    pub fn build_config(self) -> Result<ClientConfig> {
        let candidates = match &self.base_urls {
            Some(base_urls) => EndpointCandidates::parse(base_urls.as_slice())?,
            None => ClientConfig::default_candidates(),
        };
        let mut config = ClientConfig::new(candidates);
        if let Some(attempt_timeout) = self.attempt_timeout {
            config.attempt_timeout = validate_timeout(attempt_timeout)?;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(offline_mode) = self.offline_mode {
            config.offline_mode = offline_mode;
        }
        Ok(config)
    }
}

impl ClientBuilder for GroomingApiClientBuilder {
    fn build(self) -> Result<GroomingApiClient> {
        GroomingApiClient::new(self.build_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_builder_overrides() {
        let config = GroomingApiClientBuilder::new()
            .base_urls(&["http://a:1", "http://b:2/"])
            .attempt_timeout(Duration::from_millis(300))
            .user_agent("demo/1.0")
            .offline_mode(OfflineMode::Fail)
            .build_config()
            .unwrap();

        let urls: Vec<&str> = config.candidates().iter().map(|a| a.base_url()).collect();
        assert_eq!(urls, vec!["http://a:1", "http://b:2"]);
        assert_eq!(config.attempt_timeout(), Duration::from_millis(300));
        assert_eq!(config.user_agent(), "demo/1.0");
        assert!(matches!(config.offline_mode(), OfflineMode::Fail));
    }

    #[test]
    fn test_builder_rejects_empty_candidates() {
        let empty: [&str; 0] = [];
        let result = GroomingApiClientBuilder::new().base_urls(&empty).build();
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = GroomingApiClientBuilder::new()
            .attempt_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }
}
