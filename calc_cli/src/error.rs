use std::path::PathBuf;

use calc_core::{CalcError, ErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("cannot read settings file {}: {source}", path.display())]
    SettingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Calc(err) => match err.kind() {
                ErrorKind::Parse => 2,
                ErrorKind::Domain => 3,
                ErrorKind::Internal => 70,
            },
            Self::SettingsFile { .. } => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Calc(err) => err.error_code(),
            Self::SettingsFile { .. } => "SETTINGS_FILE",
            Self::Serialization(_) => "SERIALIZATION",
            Self::Io(_) => "IO",
        }
    }
}
