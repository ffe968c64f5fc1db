use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{demo::dashboard::Dashboard, infrastructure::cli::Cli, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CounterConfig {
    pub step: i64,
    pub limit: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TitleConfig {
    pub max_width: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    pub counter: CounterConfig,
    pub title: TitleConfig,
}

impl Config {
    /// Load the embedded defaults, then any user config files on top
    ///
    /// User files are optional; the defaults alone form a valid config.
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply command line overrides
    pub fn merge_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(step) = cli.step {
            self.counter.step = step;
        }
        if let Some(limit) = cli.limit {
            self.counter.limit = limit;
        }
        if let Some(max_width) = cli.max_title_width {
            self.title.max_width = max_width;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.step <= 0 {
            return Err(ConfigError::Message(format!(
                "counter.step must be positive, got {}",
                self.counter.step
            )));
        }
        if self.counter.limit <= 0 {
            return Err(ConfigError::Message(format!(
                "counter.limit must be positive, got {}",
                self.counter.limit
            )));
        }
        if self.title.max_width == 0 {
            return Err(ConfigError::Message(String::from(
                "title.max_width must be positive",
            )));
        }
        Ok(())
    }

    /// Initial dashboard described by this config
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.counter.step, self.counter.limit, self.title.max_width)
    }
}
