/// Result alias used throughout the crate, with anyhow::Error as the error type.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
