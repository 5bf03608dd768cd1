pub mod asin;
pub mod checksum;
pub mod classify;
pub mod collections;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod serialize;
pub mod walker;

pub use config::AppConfig;
pub use engine::{CollectionEngine, RunResult};
pub use error::Error;
pub use report::{Diagnostics, SilentDiagnostics};
