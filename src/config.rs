use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisParams,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameters for one analysis run. The presentation layer collects
/// these from the user and passes them in as plain values.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisParams {
    pub window_length_days: usize,
    pub discount_threshold_pct: f64,
    pub premium_threshold_pct: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            window_length_days: 30,
            discount_threshold_pct: 2.0,
            premium_threshold_pct: 2.0,
        }
    }
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<()> {
        if !(1..=180).contains(&self.window_length_days) {
            bail!(
                "window_length_days must be in [1, 180], got {}",
                self.window_length_days
            );
        }
        for (name, value) in [
            ("discount_threshold_pct", self.discount_threshold_pct),
            ("premium_threshold_pct", self.premium_threshold_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                bail!("{} must be in [0, 100], got {}", name, value);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisParams::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config/default.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .analysis
            .validate()
            .context("invalid [analysis] section")?;
        Ok(config)
    }
}
