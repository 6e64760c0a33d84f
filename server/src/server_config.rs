use serde::{Deserialize, Serialize};
use snake_boost_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use snake_boost_common::games::snake::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, is_valid_board_size};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "snake_boost_server.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub log_prefix: Option<String>,
    pub default_width: u8,
    pub default_height: u8,
    #[serde(default = "default_echo_events")]
    pub echo_events: bool,
}

fn default_echo_events() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_prefix: None,
            default_width: 16,
            default_height: 16,
            echo_events: default_echo_events(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if !is_valid_board_size(self.default_width, self.default_height) {
            return Err(format!(
                "Default board size must be between {} and {} on each side, got {}x{}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.default_width, self.default_height
            ));
        }
        Ok(())
    }
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}
