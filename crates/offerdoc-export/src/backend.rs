//! The document-rendering capability and its one-time startup probe.

use serde::{Deserialize, Serialize};

use crate::document::LaidOutDocument;
use crate::error::ExportError;
use crate::pdf::PdfWriterBackend;

/// Turns laid-out pages into a downloadable binary document.
pub trait DocumentBackend {
    fn name(&self) -> &'static str;

    fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, ExportError>;
}

/// Loads a backend at startup. Failure means export is unavailable for the
/// lifetime of the session.
pub trait BackendLoader {
    fn load(&self) -> Result<Box<dyn DocumentBackend>, ExportError>;
}

/// Which backend the application asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Pdf,
    /// No rendering capability; export stays disabled.
    None,
}

impl BackendKind {
    pub fn loader(self) -> Box<dyn BackendLoader> {
        match self {
            BackendKind::Pdf => Box::new(PdfWriterLoader),
            BackendKind::None => Box::new(UnavailableLoader::new("no document backend configured")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriterLoader;

impl BackendLoader for PdfWriterLoader {
    fn load(&self) -> Result<Box<dyn DocumentBackend>, ExportError> {
        Ok(Box::new(PdfWriterBackend))
    }
}

/// A loader that always fails.
#[derive(Debug, Clone)]
pub struct UnavailableLoader {
    reason: String,
}

impl UnavailableLoader {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl BackendLoader for UnavailableLoader {
    fn load(&self) -> Result<Box<dyn DocumentBackend>, ExportError> {
        Err(ExportError::CapabilityUnavailable(self.reason.clone()))
    }
}

/// Outcome of probing a [`BackendLoader`] once at startup.
pub enum Capability {
    Ready(Box<dyn DocumentBackend>),
    Unavailable { reason: String },
}

impl Capability {
    pub fn probe(loader: &dyn BackendLoader) -> Self {
        match loader.load() {
            Ok(backend) => {
                tracing::info!(backend = backend.name(), "document backend loaded");
                Capability::Ready(backend)
            }
            Err(e) => {
                let reason = match e {
                    ExportError::CapabilityUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                tracing::warn!(%reason, "document backend unavailable, export disabled");
                Capability::Unavailable { reason }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Ready(_))
    }

    pub fn backend(&self) -> Result<&dyn DocumentBackend, ExportError> {
        match self {
            Capability::Ready(backend) => Ok(backend.as_ref()),
            Capability::Unavailable { reason } => {
                Err(ExportError::CapabilityUnavailable(reason.clone()))
            }
        }
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Ready(backend) => f.debug_tuple("Ready").field(&backend.name()).finish(),
            Capability::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
