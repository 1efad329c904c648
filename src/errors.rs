//src/errors.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the analysis pipeline can fail with. Only input problems are
/// fatal; failing to write the result file is handled by the CLIs as a
/// warning after the screen report has already been printed.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("cannot open file {}: {source}", .path.display())]
    FileNotReadable {
        path: PathBuf,
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
