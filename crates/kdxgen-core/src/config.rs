use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

/// Longest collection name the device display handles cleanly.
pub const MAX_DISPLAY_LEN: usize = 48;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Maximum number of characters allowed in a collection name.
    #[serde(default = "default_max_name_len")]
    pub max_collection_name_len: usize,
    /// Render checksum keys with uppercase hex digits.
    #[serde(default)]
    pub uppercase_hex: bool,
}

fn default_max_name_len() -> usize {
    MAX_DISPLAY_LEN
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_collection_name_len: MAX_DISPLAY_LEN,
            uppercase_hex: false,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
