//! Error types emitted by the Marquee CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use marquee_core::ParseSurfaceError;
use thiserror::Error;

/// Errors emitted by the Marquee CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing field/flag.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Which input the path was given for.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Which input the path was given for.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Which input the path was given for.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The requested surface name is unknown.
    #[error(transparent)]
    UnknownSurface(#[from] ParseSurfaceError),
    /// The clock override could not be parsed as RFC 3339.
    #[error("failed to parse --at timestamp {raw:?}: {source}")]
    InvalidTimestamp {
        /// The raw value provided.
        raw: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Opening the events file failed.
    #[error("failed to open events file at {path:?}: {source}")]
    OpenEvents {
        /// Path to the events file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Events JSON could not be decoded.
    #[error("failed to parse events JSON at {path:?}: {source}")]
    ParseEvents {
        /// Path to the events file.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Serializing the ranked report failed.
    #[error("failed to serialize ranked report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the ranked report failed.
    #[error("failed to write ranked report: {0}")]
    WriteReport(#[source] std::io::Error),
}
