/*
[INPUT]:  YAML configuration file
[OUTPUT]: API credentials and client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use occe_adapter::{ClientConfig, Credentials, OcceClient};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the OCCE command line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OcceConfig {
    /// API access key, sent with every signed request
    #[serde(default)]
    pub access_key: Option<String>,
    /// API secret key, used only to sign requests
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// TCP connect timeout
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Override of the public endpoint prefix
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Override of the versioned API host
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Default for OcceConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            public_base_url: None,
            api_base_url: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl OcceConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Credential pair, required for authenticated commands
    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        let access_key = non_empty(self.access_key.as_deref()).context("access_key is not set")?;
        let secret_key = non_empty(self.secret_key.as_deref()).context("secret_key is not set")?;
        Ok(Credentials::new(access_key, secret_key))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Build a client; credentials are attached only when `authenticated`
    pub fn build_client(&self, authenticated: bool) -> anyhow::Result<OcceClient> {
        let credentials = if authenticated {
            Some(self.credentials()?)
        } else {
            None
        };

        let client = match (&self.public_base_url, &self.api_base_url) {
            (None, None) => OcceClient::with_config(self.client_config(), credentials),
            (Some(public), Some(api)) => OcceClient::with_config_and_base_urls(
                self.client_config(),
                public,
                api,
                credentials,
            ),
            _ => bail!("public_base_url and api_base_url must be set together"),
        };
        client.context("build OCCE client")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
