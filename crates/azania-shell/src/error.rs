use thiserror::Error;

/// The error type returned by page resolvers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The page exists but its code could not be loaded.
    #[error("page for `{path}` is unavailable: {reason}")]
    Unavailable {
        /// The path being resolved.
        path: String,
        /// Why the page could not be loaded.
        reason: String,
    },
    /// The resolver failed for any other reason.
    #[error("failed to resolve `{path}`: {reason}")]
    Failed {
        /// The path being resolved.
        path: String,
        /// Why resolution failed.
        reason: String,
    },
}

/// The result type returned by page resolvers.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// The error type returned when reading the shell configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// failed to parse configuration.
    #[error("failed to parse configuration")]
    Json(#[from] serde_json::Error),
    /// unknown log level.
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// The result type returned by configuration methods.
pub type ConfigResult<T> = Result<T, ConfigError>;
