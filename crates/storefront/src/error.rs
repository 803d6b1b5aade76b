#[derive(thiserror::Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Failed to read {path}: {reason}")]
    StoreRead { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    StoreWrite { path: String, reason: String },

    #[error("Invalid data in {path}: {reason}")]
    InvalidData { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}
