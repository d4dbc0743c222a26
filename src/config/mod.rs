use crate::errors::{AppError, AppResult};
use crate::models::City;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// City → dataset file name mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasets {
    #[serde(default = "default_chicago")]
    pub chicago: String,
    #[serde(default = "default_new_york_city")]
    pub new_york_city: String,
    #[serde(default = "default_washington")]
    pub washington: String,
}

fn default_chicago() -> String {
    "chicago.csv".to_string()
}
fn default_new_york_city() -> String {
    "new_york_city.csv".to_string()
}
fn default_washington() -> String {
    "washington.csv".to_string()
}

impl Default for Datasets {
    fn default() -> Self {
        Self {
            chicago: default_chicago(),
            new_york_city: default_new_york_city(),
            washington: default_washington(),
        }
    }
}

impl Datasets {
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub datasets: Datasets,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            datasets: Datasets::default(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbikeshare")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Parse a YAML document; missing fields fall back to their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file, creating its directory.
    /// An existing file is kept unless `force` is set.
    pub fn init(force: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !force {
            return Ok(path);
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    /// The separator line printed between report sections.
    pub fn separator(&self) -> String {
        crate::utils::formatting::separator_line(&self.separator_char, self.separator_width)
    }
}
