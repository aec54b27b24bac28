//! One editing session: form state, live preview and export.

use std::fmt;

use offerdoc_core::dates::today_iso;
use offerdoc_core::models::{FormFieldSet, RedactionPolicy, ResolvedForm, TemplateVariant};
use offerdoc_export::{BackendLoader, ExportError, Exporter, LayoutConfig, PreviewRenderer};

use crate::config::AppConfig;
use crate::download::{Delivered, DownloadSink};
use crate::error::AppError;
use crate::surface::PreviewSurface;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub variant: TemplateVariant,
    pub layout: LayoutConfig,
    pub policy: RedactionPolicy,
    /// Pre-fill an empty `date` field with today's date on start.
    pub fill_today: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variant: TemplateVariant::default(),
            layout: LayoutConfig::default(),
            policy: RedactionPolicy::default(),
            fill_today: true,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            variant: config.variant,
            layout: config.layout.clone(),
            policy: config.redaction_policy(),
            fill_today: true,
        }
    }
}

/// State of the export control, fixed at startup by the capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTrigger {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing message raised by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Info => write!(f, "{}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

pub struct EditorSession<S> {
    form: FormFieldSet,
    policy: RedactionPolicy,
    renderer: PreviewRenderer,
    exporter: Exporter,
    surface: PreviewSurface,
    sink: S,
    trigger: ExportTrigger,
    notices: Vec<Notice>,
}

impl<S: DownloadSink> EditorSession<S> {
    /// Probe the backend once, set up the export control and render the
    /// initial preview.
    pub fn start(
        options: SessionOptions,
        loader: &dyn BackendLoader,
        surface: PreviewSurface,
        sink: S,
    ) -> Result<Self, AppError> {
        let SessionOptions {
            variant,
            layout,
            policy,
            fill_today,
        } = options;

        let renderer = PreviewRenderer::new(variant)?;
        let exporter = Exporter::new(variant, layout, loader);

        let trigger = if exporter.is_available() {
            ExportTrigger {
                enabled: true,
                label: variant.export_label().to_string(),
            }
        } else {
            ExportTrigger {
                enabled: false,
                label: variant.unavailable_label().to_string(),
            }
        };

        let mut form = FormFieldSet::new();
        if fill_today {
            form.set("date", today_iso());
        }

        let mut session = Self {
            form,
            policy,
            renderer,
            exporter,
            surface,
            sink,
            trigger,
            notices: Vec::new(),
        };
        session.refresh();

        tracing::info!(
            variant = ?variant,
            export_enabled = session.trigger.enabled,
            "editor session started"
        );
        Ok(session)
    }

    pub fn variant(&self) -> TemplateVariant {
        self.exporter.variant()
    }

    pub fn form(&self) -> &FormFieldSet {
        &self.form
    }

    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    pub fn trigger(&self) -> &ExportTrigger {
        &self.trigger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Update one field and re-render the preview.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.form.set(name, value);
        self.refresh();
    }

    /// Replace the whole form. Fields absent from `form` become empty, except
    /// that an empty `date` keeps the current one.
    pub fn set_fields(&mut self, mut form: FormFieldSet) {
        if form.get("date").is_empty() && !self.form.get("date").is_empty() {
            form.set("date", self.form.get("date"));
        }
        self.form = form;
        self.refresh();
    }

    fn resolved(&self) -> ResolvedForm {
        ResolvedForm::resolve(&self.form, &self.policy)
    }

    fn refresh(&mut self) {
        let preview = self.renderer.render(&self.resolved());
        self.surface.apply(&preview);
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Export the current form and hand the file to the download sink.
    ///
    /// With no rendering capability this only raises a notice; the sink is
    /// never touched.
    pub fn export(&mut self) -> Result<Delivered, AppError> {
        if !self.trigger.enabled {
            let variant = self.variant();
            self.notify(NoticeLevel::Error, variant.unavailable_notice());
            tracing::warn!("export requested without a document backend");
            let reason = match self.exporter.capability().backend() {
                Err(ExportError::CapabilityUnavailable(reason)) => reason,
                _ => variant.unavailable_label().to_string(),
            };
            return Err(ExportError::CapabilityUnavailable(reason).into());
        }

        let artifact = match self.exporter.export(&self.resolved()) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.notify(NoticeLevel::Error, e.to_string());
                return Err(e.into());
            }
        };

        match self.sink.deliver(&artifact.filename, &artifact.bytes) {
            Ok(delivered) => {
                self.notify(NoticeLevel::Info, format!("saved {}", delivered.location));
                Ok(delivered)
            }
            Err(e) => {
                tracing::error!(error = %e, "download failed");
                self.notify(NoticeLevel::Error, e.to_string());
                Err(e)
            }
        }
    }
}
