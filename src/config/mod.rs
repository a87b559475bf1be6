//! User preferences for the CLI. Only preferences are written to disk;
//! transactions always stay in memory.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyFormatter, NegativeStyle};
use crate::errors::TrackerError;

const HOME_ENV: &str = "FINANCE_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = ".finance_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const MIN_CHART_WIDTH: usize = 10;
const MAX_CHART_WIDTH: usize = 200;

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 4] = ["currency_symbol", "negative_style", "chart_width", "color"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub negative_style: NegativeStyle,
    pub chart_width: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            negative_style: NegativeStyle::Sign,
            chart_width: 40,
            color: true,
        }
    }
}

impl Config {
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.currency_symbol.clone(), self.negative_style)
    }

    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        match key {
            "currency_symbol" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(TrackerError::Config("currency symbol cannot be empty".into()));
                }
                self.currency_symbol = symbol.to_string();
            }
            "negative_style" => {
                self.negative_style = match value.trim().to_ascii_lowercase().as_str() {
                    "sign" => NegativeStyle::Sign,
                    "parentheses" | "parens" => NegativeStyle::Parentheses,
                    other => {
                        return Err(TrackerError::Config(format!(
                            "unknown negative style `{other}` (use sign or parentheses)"
                        )))
                    }
                };
            }
            "chart_width" => {
                let width = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| TrackerError::Config(format!("invalid chart width `{value}`")))?;
                if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&width) {
                    return Err(TrackerError::Config(format!(
                        "chart width must be between {MIN_CHART_WIDTH} and {MAX_CHART_WIDTH}"
                    )));
                }
                self.chart_width = width;
            }
            "color" => {
                self.color = match value.trim().to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    other => {
                        return Err(TrackerError::Config(format!(
                            "invalid color setting `{other}` (use on or off)"
                        )))
                    }
                };
            }
            other => {
                return Err(TrackerError::Config(format!(
                    "unknown setting `{other}` (available: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] under the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `FINANCE_TRACKER_HOME` when set, otherwise `~/.finance_tracker`.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Returns the stored preferences, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), TrackerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
