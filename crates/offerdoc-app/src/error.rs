use thiserror::Error;

use offerdoc_core::error::CoreError;
use offerdoc_export::ExportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("invalid form: {0}")]
    Form(#[from] CoreError),

    #[error("failed to write {path}: {source}")]
    Download {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
