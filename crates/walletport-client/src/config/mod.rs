//! Provider config loader (strict parsing).

pub mod schema;

use std::fs;

use walletport_core::error::{Result, WalletPortError};

pub use schema::{ChannelSection, MessengerSection, ProviderConfig};

pub fn load_from_file(path: &str) -> Result<ProviderConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WalletPortError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ProviderConfig> {
    let cfg: ProviderConfig = serde_yaml::from_str(s)
        .map_err(|e| WalletPortError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
