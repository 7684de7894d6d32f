use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use staffguard_core::pipeline::{
    DEFAULT_BEST_VALUE_LIMIT, DEFAULT_HOME_OFFICE_BONUS, DEFAULT_SNAPSHOT_PATH,
    DEFAULT_SOURCE_PATH,
};
use staffguard_core::readers::{ReaderConfig, ReaderConfigBuilder};
use staffguard_core::{PipelineConfig, engine::DEFAULT_TOP_CITIES, domain::DEFAULT_TAX_RATE};

use crate::errors::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineSection,
    pub sales: SalesSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    pub source: String,
    pub clean_snapshot: String,
    pub top_cities: usize,
    pub best_value_limit: usize,
    pub home_office_bonus: f64,
    pub tax_rate: f64,
    pub as_of: Option<String>,
    pub delimiter: String,
    pub batch_size: usize,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_PATH.to_string(),
            clean_snapshot: DEFAULT_SNAPSHOT_PATH.to_string(),
            top_cities: DEFAULT_TOP_CITIES,
            best_value_limit: DEFAULT_BEST_VALUE_LIMIT,
            home_office_bonus: DEFAULT_HOME_OFFICE_BONUS,
            tax_rate: DEFAULT_TAX_RATE,
            as_of: None,
            delimiter: ",".to_string(),
            batch_size: ReaderConfig::default().batch_size,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SalesSection {
    pub workbook: Option<String>,
}

/// Read the TOML config, or the defaults when no file is given.
pub fn parse_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let config_path = Path::new(path);
    if !config_path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_string(),
        }
        .into());
    }

    let config_str = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    Ok(config)
}

impl PipelineSection {
    fn delimiter(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ConfigError::InvalidDelimiter {
                value: self.delimiter.clone(),
            }),
        }
    }

    pub fn to_pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ConfigError::InvalidTaxRate {
                value: self.tax_rate,
            });
        }

        let reader = ReaderConfigBuilder::new()
            .with_batch_size(self.batch_size)
            .with_delimiter(self.delimiter()?)
            .build();

        let mut builder = PipelineConfig::builder()
            .with_source_path(&self.source)
            .with_clean_snapshot_path(&self.clean_snapshot)
            .with_top_cities(self.top_cities)
            .with_best_value_limit(self.best_value_limit)
            .with_home_office_bonus(self.home_office_bonus)
            .with_tax_rate(self.tax_rate)
            .with_reader(reader);

        if let Some(as_of) = &self.as_of {
            let date = NaiveDate::parse_from_str(as_of, "%Y-%m-%d").map_err(|_| {
                ConfigError::InvalidDate {
                    value: as_of.clone(),
                }
            })?;
            builder = builder.with_as_of(date);
        }

        Ok(builder.build())
    }
}
