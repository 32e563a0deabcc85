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

use crate::network::{EndpointCandidates, ServiceAddress};
use crate::{Error, OfflineMode, Result};

/// Environment variable with the comma separated candidate base URLs.
pub const BASE_URLS_ENV: &str = "GROOMING_API_BASE_URLS";

/// Environment variable with the per-attempt timeout, in milliseconds.
pub const TIMEOUT_MS_ENV: &str = "GROOMING_API_TIMEOUT_MS";

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

pub const DEFAULT_USER_AGENT: &str = concat!("grooming-api-client/", env!("CARGO_PKG_VERSION"));

/// Everything the client needs to know at construction time. There is no
/// global base URL: each client only uses the candidates given here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) candidates: EndpointCandidates,
    pub(crate) attempt_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) offline_mode: OfflineMode,
}

impl ClientConfig {
    pub fn new(candidates: EndpointCandidates) -> Self {
        Self {
            candidates,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            offline_mode: OfflineMode::default(),
        }
    }

    /// The local mock server on its usual port, then the loopback IP, the
    /// Android emulator alias for the host, and the alternative port.
    pub fn default_candidates() -> EndpointCandidates {
        let local = |host: &str, port: u16| {
            ServiceAddress::new_without_ssl(host.to_string(), Some(port), None)
        };
        EndpointCandidates::new(
            local("localhost", 3001),
            vec![
                local("127.0.0.1", 3001),
                local("10.0.2.2", 3001),
                local("localhost", 3000),
            ],
        )
    }

    /// Reads [`BASE_URLS_ENV`] and [`TIMEOUT_MS_ENV`]. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = match lookup(BASE_URLS_ENV) {
            Some(value) => {
                let urls: Vec<&str> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .collect();
                EndpointCandidates::parse(urls.as_slice())?
            }
            None => Self::default_candidates(),
        };

        let mut config = Self::new(candidates);
        if let Some(value) = lookup(TIMEOUT_MS_ENV) {
            let millis: u64 = value.trim().parse().map_err(|_| {
                Error::InvalidConfiguration(format!(
                    "{TIMEOUT_MS_ENV} must be a number of milliseconds, got '{value}'"
                ))
            })?;
            config.attempt_timeout = validate_timeout(Duration::from_millis(millis))?;
        }
        Ok(config)
    }

    pub fn candidates(&self) -> &EndpointCandidates {
        &self.candidates
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn offline_mode(&self) -> &OfflineMode {
        &self.offline_mode
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::default_candidates())
    }
}

pub(crate) fn validate_timeout(timeout: Duration) -> Result<Duration> {
    if timeout.is_zero() {
        return Err(Error::InvalidConfiguration(
            "attempt timeout must be greater than zero".to_string(),
        ));
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        let urls: Vec<&str> = config.candidates().iter().map(|a| a.base_url()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:3001",
                "http://127.0.0.1:3001",
                "http://10.0.2.2:3001",
                "http://localhost:3000",
            ]
        );
        assert_eq!(config.attempt_timeout(), Duration::from_secs(3));
        assert!(config.user_agent().starts_with("grooming-api-client/"));
        assert!(matches!(
            config.offline_mode(),
            OfflineMode::FallbackData(_)
        ));
    }

    #[test]
    fn test_from_lookup_without_variables() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.candidates(), &ClientConfig::default_candidates());
        assert_eq!(config.attempt_timeout(), DEFAULT_ATTEMPT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_with_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URLS_ENV, " http://api.local:8080/ , ,http://10.0.2.2:3001"),
            (TIMEOUT_MS_ENV, "750"),
        ]))
        .unwrap();
        let urls: Vec<&str> = config.candidates().iter().map(|a| a.base_url()).collect();
        assert_eq!(urls, vec!["http://api.local:8080", "http://10.0.2.2:3001"]);
        assert_eq!(config.attempt_timeout(), Duration::from_millis(750));
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(BASE_URLS_ENV, " , ")])),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(BASE_URLS_ENV, "not a url")])),
            Err(Error::NetworkError(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(TIMEOUT_MS_ENV, "soon")])),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(TIMEOUT_MS_ENV, "0")])),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
