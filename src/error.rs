use std::path::PathBuf;
use thiserror::Error;

/// Exit code when the platform description cannot be loaded
pub const EXIT_PLATFORM_LOAD: i32 = 2;
/// Exit code when the port configuration is inconsistent
pub const EXIT_PORT_CONFIG: i32 = 4;
/// Exit code when a requested port does not exist
pub const EXIT_INVALID_PORT: i32 = 6;

#[derive(Error, Debug)]
pub enum SfpUtilError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {}: {}", .path.display(), .source)]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Platform error: {message}")]
    PlatformLoad { message: String },

    #[error("Port configuration error: {message}")]
    PortConfig { message: String },

    #[error("Invalid port: {port}")]
    InvalidPort { port: String },

    #[error("No module present in physical port {physical}")]
    NotPresent { physical: u32 },
}

impl SfpUtilError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SfpUtilError::Io { .. }
            | SfpUtilError::Toml { .. }
            | SfpUtilError::Json { .. }
            | SfpUtilError::PlatformLoad { .. }
            | SfpUtilError::NotPresent { .. } => EXIT_PLATFORM_LOAD,
            SfpUtilError::PortConfig { .. } => EXIT_PORT_CONFIG,
            SfpUtilError::InvalidPort { .. } => EXIT_INVALID_PORT,
        }
    }
}

pub type Result<T> = std::result::Result<T, SfpUtilError>;
