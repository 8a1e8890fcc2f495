//! Error types emitted by the Tourline CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tourline_core::SequenceError;

/// Errors emitted by the Tourline CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The configured sphere radius cannot be used for distances.
    #[error("earth radius must be a positive, finite number of kilometres, got {value}")]
    InvalidEarthRadius {
        /// Rejected radius.
        value: f64,
    },
    /// Opening the sequence request file failed.
    #[error("failed to open sequence request at {path:?}: {source}")]
    OpenSequenceRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Sequence request JSON could not be decoded.
    #[error("failed to parse sequence request JSON at {path:?}: {source}")]
    ParseSequenceRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The sequencer rejected the request's waypoints.
    #[error("cannot sequence waypoints in {path:?}: {source}")]
    Sequence {
        /// Request path.
        path: Utf8PathBuf,
        /// Sequencer failure.
        #[source]
        source: SequenceError,
    },
    /// Serialising the sequence response failed.
    #[error("failed to serialise sequence response: {0}")]
    SerialiseSequenceResponse(#[source] serde_json::Error),
    /// Writing the sequence output failed.
    #[error("failed to write sequence output: {0}")]
    WriteSequenceOutput(#[source] std::io::Error),
}
