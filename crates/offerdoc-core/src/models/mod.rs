pub mod form;
pub mod redaction;
pub mod variant;

pub use form::FormFieldSet;
pub use redaction::{DEFAULT_SUPPRESS_MARKER, FieldValue, RedactionPolicy, ResolvedForm};
pub use variant::{FieldKind, FieldSpec, Section, SectionSpec, TemplateVariant};
