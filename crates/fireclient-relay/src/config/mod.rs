//! Relay config loader (strict parsing).

pub mod schema;

use std::fs;

use fireclient_core::error::{FireClientError, Result};

pub use schema::{FireClientConfig, RelaySection};

pub fn load_from_file(path: &str) -> Result<FireClientConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FireClientError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FireClientConfig> {
    let cfg: FireClientConfig = serde_yaml::from_str(s)
        .map_err(|e| FireClientError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
