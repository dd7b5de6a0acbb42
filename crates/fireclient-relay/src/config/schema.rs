use serde::Deserialize;
use fireclient_core::error::{FireClientError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FireClientConfig {
    pub version: u32,

    #[serde(default)]
    pub relay: RelaySection,
}

impl Default for FireClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            relay: RelaySection::default(),
        }
    }
}

impl FireClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FireClientError::UnsupportedVersion);
        }

        self.relay.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySection {
    /// Marker prepended to every relayed message.
    #[serde(default = "default_remote_prefix")]
    pub remote_prefix: String,

    /// Bytes of request/response body shown in the request summary.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Advertised as `User-Agent: FirePHP/<client_version>`.
    #[serde(default = "default_client_version")]
    pub client_version: String,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            remote_prefix: default_remote_prefix(),
            preview_length: default_preview_length(),
            client_version: default_client_version(),
        }
    }
}

impl RelaySection {
    pub fn validate(&self) -> Result<()> {
        if self.remote_prefix.chars().any(char::is_control) {
            return Err(FireClientError::InvalidConfig(
                "relay.remote_prefix must not contain control characters".into(),
            ));
        }
        if !(1..=65536).contains(&self.preview_length) {
            return Err(FireClientError::InvalidConfig(
                "relay.preview_length must be between 1 and 65536".into(),
            ));
        }
        if self.client_version.is_empty()
            || !self.client_version.chars().all(|c| c.is_ascii_graphic())
        {
            return Err(FireClientError::InvalidConfig(
                "relay.client_version must be a non-empty token without spaces".into(),
            ));
        }
        Ok(())
    }
}

fn default_remote_prefix() -> String {
    "[REMOTE]".into()
}
fn default_preview_length() -> usize {
    128
}
fn default_client_version() -> String {
    "0.7.4".into()
}
