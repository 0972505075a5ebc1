use std::time::Duration;

use serde::Deserialize;
use walletport_core::error::{Result, WalletPortError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub version: u32,

    #[serde(default)]
    pub messenger: MessengerSection,

    #[serde(default)]
    pub channel: ChannelSection,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            version: 1,
            messenger: MessengerSection::default(),
            channel: ChannelSection::default(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WalletPortError::UnsupportedVersion);
        }

        self.messenger.validate()?;
        self.channel.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessengerSection {
    /// Per-call reply deadline. Absent means calls wait for their reply
    /// indefinitely.
    #[serde(default)]
    pub call_timeout_ms: Option<u64>,
}

impl MessengerSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(ms) = self.call_timeout_ms {
            if !(100..=600000).contains(&ms) {
                return Err(WalletPortError::BadRequest(
                    "messenger.call_timeout_ms must be between 100 and 600000".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelSection {
    #[serde(default = "default_max_envelope_bytes")]
    pub max_envelope_bytes: usize,

    #[serde(default = "default_inbound_capacity")]
    pub inbound_capacity: usize,
}

impl Default for ChannelSection {
    fn default() -> Self {
        Self {
            max_envelope_bytes: default_max_envelope_bytes(),
            inbound_capacity: default_inbound_capacity(),
        }
    }
}

impl ChannelSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=16 * 1024 * 1024).contains(&self.max_envelope_bytes) {
            return Err(WalletPortError::BadRequest(
                "channel.max_envelope_bytes must be between 256 and 16777216".into(),
            ));
        }
        if !(1..=65536).contains(&self.inbound_capacity) {
            return Err(WalletPortError::BadRequest(
                "channel.inbound_capacity must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_envelope_bytes() -> usize {
    256 * 1024
}
fn default_inbound_capacity() -> usize {
    64
}
