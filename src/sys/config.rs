use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Operator-supplied configuration: where the API lives and how to talk to
/// it. Read from the config file at startup, editable from the Settings
/// panel, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            api_token: String::new(),
            enable_logging: default_true(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        ProjectDirs::from("com", "vidscout", "vidscout")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME")
                    .or_else(|_| std::env::var("USERPROFILE"))
                    .unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".vidscout").join("config.toml")
            })
    }

    pub fn get_log_path() -> PathBuf {
        ProjectDirs::from("com", "vidscout", "vidscout")
            .map(|proj_dirs| proj_dirs.data_dir().join("vidscout.log"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME")
                    .or_else(|_| std::env::var("USERPROFILE"))
                    .unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".vidscout").join("vidscout.log")
            })
    }

    pub fn load() -> Self {
        let path = Self::get_config_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::get_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write the file by hand so every key keeps its comment.
        let mut content = String::from("# vidscout configuration\n\n");

        content.push_str("# Base URL of the video search API.\n");
        content.push_str(&format!("api_base_url = \"{}\"\n\n", self.api_base_url));

        content.push_str("# Bearer token sent with every request. Leave empty for no auth.\n");
        content.push_str(&format!("api_token = \"{}\"\n\n", self.api_token));

        content.push_str("# Whether to write a log file.\n");
        content.push_str(&format!("enable_logging = {}\n", self.enable_logging));

        fs::write(path, content)?;
        Ok(())
    }
}
