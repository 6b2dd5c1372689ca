pub mod app_config;
pub mod availability;
mod config;
pub mod options;
pub mod product;
pub mod resolve;
pub mod sort;
pub mod text;

pub use app_config::{AppConfig, Environment};
pub use availability::{aggregate, Availability};
pub use config::{load_app_config, load_app_config_from_env};
pub use options::{classify, OptionKeys};
pub use product::{Money, OptionDef, Product, ProductSummary, Variant};
pub use resolve::resolve;
pub use sort::{sort_colors, sort_sizes};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
