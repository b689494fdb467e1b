use crate::{ApiSettings, AppConstants, LoggingSettings, RawSettings, SecretSettings};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
    pub constants: AppConstants,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let mut constants = raw.constants;
        // A default above the cap would never be honoured.
        constants.search.default_limit = constants
            .search
            .default_limit
            .min(constants.search.max_limit);

        Self {
            api: raw.api,
            logging: raw.logging,
            secrets: raw.secrets,
            constants,
        }
    }
}

impl ApiSettings {
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| eyre!("Invalid address {}:{}: {}", self.host, self.port, e))
    }
}
