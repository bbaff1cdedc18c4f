use std::net::SocketAddr;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::MoveServiceConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_server.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Allow browser UIs served from any origin to call the API.
    pub cors_allow_any: bool,
    pub move_service: MoveServiceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            cors_allow_any: true,
            move_service: MoveServiceConfig::default(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("bind_address '{}' is not a socket address: {}", self.bind_address, e))?;
        self.move_service.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("temp_tictactoe_server_config_{}.yaml", std::process::id()));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_bind_address_is_invalid() {
        let config = ServerConfig {
            bind_address: "localhost".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ServerConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ServerConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&ServerConfig::default()).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let loaded = get_config_manager(&file_path).get_config();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(loaded.unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_nested_move_service_section_is_read() {
        let serializer = YamlConfigSerializer::new();
        let yaml = "bind_address: 127.0.0.1:9000\nmove_service:\n  opening_heuristic: false\n  default_side_a_label: A\n  default_side_b_label: B\n";
        let config: ServerConfig = serializer.deserialize(yaml).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert!(config.cors_allow_any);
        assert!(!config.move_service.opening_heuristic);
        assert_eq!(config.move_service.default_side_a_label, "A");
        assert!(config.validate().is_ok());
    }
}
