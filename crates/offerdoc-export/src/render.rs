use serde::Serialize;
use tera::{Context, Tera};

use offerdoc_core::dates::format_document_date;
use offerdoc_core::models::{FieldKind, ResolvedForm, Section, SectionSpec, TemplateVariant};

use crate::error::ExportError;

const SECTION_TEMPLATE_NAME: &str = "section.html";

/// One preview region. Values are autoescaped; paragraph newlines become `<br>`.
const SECTION_TEMPLATE: &str = r#"<section class="doc-section doc-{{ section }}">
{% if heading %}<h1 class="doc-heading">{{ heading }}</h1>
{% endif %}{% if title %}<h2 class="doc-section-title">{{ title }}</h2>
{% endif %}{% for field in fields %}<div class="field field-{{ field.kind }}{% if field.redacted %} field-redacted{% endif %}" data-field="{{ field.name }}">{% if field.labelled %}<span class="label">{{ field.label }}</span> {% endif %}<span class="value">{{ field.value | escape | linebreaksbr | safe }}</span></div>
{% endfor %}</section>
"#;

#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'a str,
    label: &'a str,
    kind: FieldKind,
    labelled: bool,
    redacted: bool,
    value: String,
}

/// Rendered preview: one HTML fragment per section, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub regions: Vec<(Section, String)>,
}

impl PreviewDocument {
    pub fn region(&self, section: Section) -> Option<&str> {
        self.regions
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, html)| html.as_str())
    }

    /// All regions concatenated, for writing a standalone preview file.
    pub fn to_html(&self) -> String {
        self.regions.iter().map(|(_, html)| html.as_str()).collect()
    }
}

/// Renders the on-screen preview of a form.
///
/// Templates are compiled once in [`PreviewRenderer::new`]; rendering is a
/// pure function of the resolved form.
#[derive(Debug)]
pub struct PreviewRenderer {
    variant: TemplateVariant,
    tera: Tera,
}

impl PreviewRenderer {
    pub fn new(variant: TemplateVariant) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(SECTION_TEMPLATE_NAME, SECTION_TEMPLATE)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { variant, tera })
    }

    pub fn variant(&self) -> TemplateVariant {
        self.variant
    }

    /// Render every section. Never fails: a section whose template fails to
    /// render is logged and comes out empty.
    pub fn render(&self, form: &ResolvedForm) -> PreviewDocument {
        let regions = self
            .variant
            .sections()
            .iter()
            .map(|spec| {
                let html = self.render_section(spec, form).unwrap_or_else(|e| {
                    tracing::error!(section = spec.section.id(), error = %e, "preview section failed to render");
                    String::new()
                });
                (spec.section, html)
            })
            .collect();
        PreviewDocument { regions }
    }

    fn render_section(&self, spec: &SectionSpec, form: &ResolvedForm) -> Result<String, ExportError> {
        let fields: Vec<FieldContext<'_>> = spec
            .fields
            .iter()
            .map(|f| {
                let shown = form.preview(f.name);
                let value = match f.kind {
                    FieldKind::Date => format_document_date(shown),
                    _ => shown.to_string(),
                };
                FieldContext {
                    name: f.name,
                    label: f.label,
                    kind: f.kind,
                    labelled: f.kind.is_labelled(),
                    redacted: form.is_redacted(f.name),
                    value,
                }
            })
            .collect();

        let heading = match spec.section {
            Section::Header => self.variant.document_heading().unwrap_or(""),
            _ => "",
        };

        let mut context = Context::new();
        context.insert("section", spec.section.id());
        context.insert("heading", heading);
        context.insert("title", spec.title);
        context.insert("fields", &fields);

        let rendered = self.tera.render(SECTION_TEMPLATE_NAME, &context)?;
        Ok(rendered)
    }
}
