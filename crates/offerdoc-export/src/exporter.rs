use offerdoc_core::models::{ResolvedForm, TemplateVariant};

use crate::backend::{BackendLoader, Capability};
use crate::document::LaidOutDocument;
use crate::error::ExportError;
use crate::paginate::lay_out;
use crate::styles::LayoutConfig;

/// A finished document ready for download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Paginates a form and renders it through the startup-probed backend.
#[derive(Debug)]
pub struct Exporter {
    variant: TemplateVariant,
    layout: LayoutConfig,
    capability: Capability,
}

impl Exporter {
    /// Probe `loader` once; its result holds for the exporter's lifetime.
    pub fn new(variant: TemplateVariant, layout: LayoutConfig, loader: &dyn BackendLoader) -> Self {
        Self {
            variant,
            layout,
            capability: Capability::probe(loader),
        }
    }

    pub fn variant(&self) -> TemplateVariant {
        self.variant
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_available()
    }

    /// Lay out without rendering.
    pub fn lay_out(&self, form: &ResolvedForm) -> LaidOutDocument {
        lay_out(form, self.variant, &self.layout)
    }

    /// File name for the download, from the exported identifying field.
    pub fn filename(&self, form: &ResolvedForm) -> String {
        self.variant
            .filename(form.export(self.variant.identifying_field()))
    }

    /// Produce the downloadable document. Fails before doing any work when
    /// the rendering capability is unavailable.
    pub fn export(&self, form: &ResolvedForm) -> Result<ExportArtifact, ExportError> {
        let backend = self.capability.backend()?;

        let document = self.lay_out(form);
        let bytes = backend.render(&document)?;
        let filename = self.filename(form);

        tracing::info!(
            filename = %filename,
            pages = document.page_count(),
            bytes = bytes.len(),
            backend = backend.name(),
            "document exported"
        );

        Ok(ExportArtifact {
            filename,
            bytes,
            page_count: document.page_count(),
        })
    }
}
