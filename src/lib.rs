pub mod app;
pub mod config;
pub mod flags;
mod routes;
pub mod telemetry;
pub mod version;

pub use flags::FlagRecord;
pub use version::{VersionError, VersionRecord};
