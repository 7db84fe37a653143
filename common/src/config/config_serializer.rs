use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Writes YAML, optionally preceded by a `#` comment block that readers skip.
#[derive(Default)]
pub struct YamlConfigSerializer {
    header: Option<String>,
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
        }
    }

    fn commented_header(&self) -> String {
        let Some(header) = &self.header else {
            return String::new();
        };
        header.lines().map(|line| format!("# {}\n", line)).collect()
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let yaml = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        Ok(self.commented_header() + &yaml)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}
