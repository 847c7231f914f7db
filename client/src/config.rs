use engine::game::SessionSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionSettings,
    /// Fixed RNG seed for reproducible sessions; random when absent.
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        self.session.validate()
    }

    /// Missing file falls back to defaults; an unreadable or invalid file is
    /// an error.
    pub fn load_or_default(path: &str) -> Result<Config, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(error) => return Err(format!("Failed to read config file {}: {}", path, error)),
        };

        let config: Config = serde_yaml_ng::from_str(&content)
            .map_err(|error| format!("Failed to parse config file {}: {}", path, error))?;

        config
            .validate()
            .map_err(|error| format!("Config validation error: {}", error))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path(suffix: &str) -> String {
        let mut path = std::env::temp_dir();
        let file_name = format!(
            "temp_tictactoe_client_config_{}_{}.yaml",
            std::process::id(),
            suffix
        );
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let config = Config::load_or_default("this_file_does_not_exist.yaml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_file_is_loaded_and_validated() {
        let file_path = get_temp_file_path("valid");
        let config = Config {
            session: SessionSettings {
                attempts: 5,
                bot_move_delay_ms: 100,
                round_reset_delay_ms: 300,
            },
            seed: Some(42),
            log_prefix: Some("Client".to_string()),
        };
        std::fs::write(&file_path, serde_yaml_ng::to_string(&config).unwrap()).unwrap();

        let loaded = Config::load_or_default(&file_path).unwrap();
        std::fs::remove_file(&file_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let file_path = get_temp_file_path("broken");
        std::fs::write(&file_path, "session: [not, a, mapping").unwrap();

        let result = Config::load_or_default(&file_path);
        std::fs::remove_file(&file_path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_settings_are_rejected() {
        let file_path = get_temp_file_path("invalid");
        let content = r#"
session:
  attempts: 0
  bot_move_delay_ms: 500
  round_reset_delay_ms: 2000
"#;
        std::fs::write(&file_path, content).unwrap();

        let result = Config::load_or_default(&file_path);
        std::fs::remove_file(&file_path).unwrap();

        assert!(result.is_err());
    }
}
