pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvSource, CsvTarget};
pub use core::etl::{DomainPipeline, DomainReport, EtlEngine, RunReport};
pub use core::transform::transform;
pub use domain::model::{Domain, Gender, NormalizedRecord, RawRecord};
pub use utils::error::{EtlError, Result};
