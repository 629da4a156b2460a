use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::game::GameSettings;
use serde::{Deserialize, Serialize};

use crate::alarm::parse_alarm_time;

const CONFIG_FILE_NAME: &str = "wakesnake_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    let path = path_override.map(str::to_string).unwrap_or_else(get_config_path);
    ConfigManager::from_yaml_file(&path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AlarmConfig {
    /// Armed automatically on startup when set (HH:MM).
    pub default_time: Option<String>,
    /// How long the wake-up banner stays before the game takes over.
    pub handoff_delay_ms: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WakeupConfig {
    /// Fixed seed for the mock weather pick, mostly for demos.
    pub weather_seed: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    pub alarm: AlarmConfig,
    pub wakeup: WakeupConfig,
}

impl Validate for AlarmConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(time) = &self.default_time {
            parse_alarm_time(time)?;
        }
        if self.handoff_delay_ms > 60_000 {
            return Err("Handoff delay must be at most 60000ms".to_string());
        }
        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.alarm.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            alarm: AlarmConfig {
                default_time: None,
                handoff_delay_ms: 2000,
            },
            wakeup: WakeupConfig { weather_seed: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_wakesnake_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialize_result = serializer.serialize(&default_config);
        assert!(serialize_result.is_ok());
        let serialized_string = serialize_result.unwrap();
        let deserialize_result = serializer.deserialize(&serialized_string);
        assert!(deserialize_result.is_ok());
        let deserialized_config = deserialize_result.unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path);

        let serialize_result = serializer.serialize(&default_config);
        assert!(serialize_result.is_ok());
        let serialized_string = serialize_result.unwrap();
        let write_result = content_provider.set_config_content(&serialized_string);
        assert!(write_result.is_ok());

        let read_result = content_provider.get_config_content();
        assert!(read_result.is_ok());
        let read_string = read_result.unwrap().unwrap();

        let deserialize_result = serializer.deserialize(&read_string);
        assert!(deserialize_result.is_ok());
        let deserialized_config = deserialize_result.unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_round_trips_through_the_manager() {
        let config = Config {
            alarm: AlarmConfig {
                default_time: Some("07:30".to_string()),
                handoff_delay_ms: 1500,
            },
            ..Config::default()
        };
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path);
        let manager = ConfigManager::new(content_provider, serializer);

        let save_result = manager.set_config(&config);
        assert!(save_result.is_ok());

        let get_result = manager.get_config();
        assert!(get_result.is_ok());
        let loaded_config = get_result.unwrap();
        assert_eq!(config, loaded_config);

        let get_again_result = manager.get_config();
        assert!(get_again_result.is_ok());
        let loaded_config_again = get_again_result.unwrap();
        assert_eq!(config, loaded_config_again);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let serializer = YamlConfigSerializer::new();

        let file_path = "this_file_does_not_exist.yaml".to_string();
        let content_provider = FileContentConfigProvider::new(file_path);
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, serializer);
        let get_result = manager.get_config();
        assert!(get_result.is_ok());
        let loaded_config = get_result.unwrap();
        assert_eq!(Config::default(), loaded_config);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              field_width: 3
              field_height: 20
              tick_interval_ms: 150
              target_score: 25
              tail_rule: Blocks
            alarm:
              default_time: null
              handoff_delay_ms: 2000
            wakeup:
              weather_seed: null
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let serializer = YamlConfigSerializer::new();
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, serializer);
        let get_result = manager.get_config();
        assert!(get_result.is_err());
    }

    #[test]
    fn test_bad_default_alarm_time_is_rejected() {
        let config = Config {
            alarm: AlarmConfig {
                default_time: Some("half past seven".to_string()),
                handoff_delay_ms: 2000,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
