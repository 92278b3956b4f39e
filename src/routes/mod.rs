pub mod flags;
pub mod infra;
pub mod version;
