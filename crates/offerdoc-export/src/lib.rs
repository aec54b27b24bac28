//! offerdoc-export
//!
//! HTML preview and paginated PDF generation for offer documents.

pub mod backend;
pub mod document;
pub mod error;
pub mod exporter;
pub mod metrics;
pub mod paginate;
pub mod pdf;
pub mod render;
pub mod styles;
pub mod wrap;

pub use backend::{BackendKind, BackendLoader, Capability, DocumentBackend};
pub use document::LaidOutDocument;
pub use error::ExportError;
pub use exporter::{ExportArtifact, Exporter};
pub use render::{PreviewDocument, PreviewRenderer};
pub use styles::LayoutConfig;
