use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::date::parse_date;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub export_format: ExportFormat,
    /// Package CSV outputs in a single ZIP archive.
    #[serde(default = "default_true")]
    pub archive: bool,
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
    #[serde(default = "default_true")]
    pub wage_split: bool,
    /// YYYY-MM-DD
    #[serde(default = "default_wage_change_date")]
    pub wage_change_date: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_true() -> bool {
    true
}
fn default_archive_name() -> String {
    "payroll_results.zip".to_string()
}
fn default_wage_change_date() -> String {
    "2026-01-01".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            export_format: ExportFormat::default(),
            archive: default_true(),
            archive_name: default_archive_name(),
            wage_split: default_true(),
            wage_change_date: default_wage_change_date(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpayroll")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpayroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpayroll.conf")
    }

    /// Load the configuration at `path`, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    fn validate(&self) -> AppResult<()> {
        if parse_date(&self.wage_change_date).is_none() {
            return Err(AppError::Config(format!(
                "wage_change_date must be YYYY-MM-DD, got '{}'",
                self.wage_change_date
            )));
        }
        Ok(())
    }

    /// Write a default configuration file at `path` (parent dirs created).
    pub fn init_at(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        println!("✅ Config file: {:?}", path);
        Ok(())
    }
}
