use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Invalid delimiter '{value}': expected a single ASCII character")]
    InvalidDelimiter { value: String },
    #[error("Invalid tax_rate {value}: expected a value between 0.0 and 1.0")]
    InvalidTaxRate { value: f64 },
    #[error("Invalid as_of date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Clean snapshot was not written: {message}")]
    SnapshotFailed { message: String },
}
