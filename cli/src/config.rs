use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_THINK_DELAY_MS: u64 = 10_000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    Ask,
    Human,
    Computer,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub think_delay_ms: u64,
    pub show_scores: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {} (got {})",
                MAX_THINK_DELAY_MS, self.think_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Ask,
            think_delay_ms: 3000,
            show_scores: false,
        }
    }
}
