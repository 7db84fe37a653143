use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{Validate, YamlFileConfigManager};

use super::{MarksConfig, MessagesConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const CONFIG_HEADER: &str = "Tic-tac-toe client settings.\nMarks are single characters other than digits, whitespace and . - _ [ ] | +";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> YamlFileConfigManager<Config> {
    config_manager_for(get_config_path())
}

pub fn config_manager_for(path: impl AsRef<Path>) -> YamlFileConfigManager<Config> {
    YamlFileConfigManager::from_yaml_file_with_header(path, CONFIG_HEADER)
}

fn default_show_cell_numbers() -> bool {
    true
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub marks: MarksConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default = "default_show_cell_numbers")]
    pub show_cell_numbers: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.marks.validate()?;
        self.messages.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marks: MarksConfig::default(),
            messages: MessagesConfig::default(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}
