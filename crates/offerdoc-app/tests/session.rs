use offerdoc_app::download::MemoryDownloads;
use offerdoc_app::error::AppError;
use offerdoc_app::session::{EditorSession, NoticeLevel, SessionOptions};
use offerdoc_app::surface::PreviewSurface;
use offerdoc_core::models::{FormFieldSet, Section, TemplateVariant};
use offerdoc_export::ExportError;
use offerdoc_export::backend::{PdfWriterLoader, UnavailableLoader};

fn options(variant: TemplateVariant) -> SessionOptions {
    SessionOptions {
        variant,
        fill_today: false,
        ..SessionOptions::default()
    }
}

fn session(variant: TemplateVariant) -> EditorSession<MemoryDownloads> {
    EditorSession::start(
        options(variant),
        &PdfWriterLoader,
        PreviewSurface::full(),
        MemoryDownloads::new(),
    )
    .unwrap()
}

#[test]
fn start_renders_an_empty_preview_and_enables_export() {
    let session = session(TemplateVariant::Generic);

    assert!(session.trigger().enabled);
    assert_eq!(session.trigger().label, "Download PDF");
    for section in Section::ALL {
        assert!(session.surface().region(section).unwrap().contains("<section"));
    }
}

#[test]
fn editing_a_field_updates_its_region() {
    let mut session = session(TemplateVariant::Generic);
    session.set_field("title", "Fiber <rollout>");

    let item = session.surface().region(Section::Item).unwrap();
    assert!(item.contains("Fiber &lt;rollout&gt;"));
}

#[test]
fn replacing_the_form_clears_old_values() {
    let mut session = session(TemplateVariant::Generic);
    session.set_field("notes", "Old note");
    session.set_fields(FormFieldSet::from_iter([("title", "New")]));

    assert!(!session.surface().to_html().contains("Old note"));
    assert_eq!(session.form().get("notes"), "");
}

#[test]
fn preview_is_stable_for_unchanged_input() {
    let mut session = session(TemplateVariant::FreightOffer);
    session.set_field("origin", "Milano");
    let first = session.surface().clone();
    session.set_field("origin", "Milano");
    assert_eq!(session.surface(), &first);
}

#[test]
fn missing_region_does_not_stop_other_regions() {
    let mut session = EditorSession::start(
        options(TemplateVariant::Generic),
        &PdfWriterLoader,
        PreviewSurface::with_regions([Section::Header, Section::Item]),
        MemoryDownloads::new(),
    )
    .unwrap();
    session.set_field("title", "Still shown");
    session.set_field("notes", "Nowhere to go");

    assert!(session.surface().region(Section::Item).unwrap().contains("Still shown"));
    assert!(session.surface().region(Section::Terms).is_none());
    assert!(!session.surface().to_html().contains("Nowhere to go"));
}

#[test]
fn start_fills_in_todays_date() {
    let session: EditorSession<MemoryDownloads> = EditorSession::start(
        SessionOptions::default(),
        &PdfWriterLoader,
        PreviewSurface::full(),
        MemoryDownloads::new(),
    )
    .unwrap();
    let date = session.form().get("date");
    assert_eq!(date.len(), 10);
    assert!(jiff::civil::Date::strptime("%Y-%m-%d", date).is_ok());
}

#[test]
fn export_delivers_the_pdf() {
    let mut session = session(TemplateVariant::Generic);
    session.set_field("title", "Q3 Offer");
    session.set_field("recipient", "Acme S.p.A.");

    let delivered = session.export().unwrap();
    assert_eq!(delivered.location, "q3-offer-document.pdf");

    let files = &session.sink().files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "q3-offer-document.pdf");
    assert!(files[0].1.starts_with(b"%PDF-"));

    assert_eq!(session.notices().len(), 1);
    assert_eq!(session.notices()[0].level, NoticeLevel::Info);
}

#[test]
fn unavailable_backend_disables_export() {
    let mut session = EditorSession::start(
        options(TemplateVariant::FreightOffer),
        &UnavailableLoader::new("pdf library missing"),
        PreviewSurface::full(),
        MemoryDownloads::new(),
    )
    .unwrap();

    assert!(!session.trigger().enabled);
    assert_eq!(session.trigger().label, "Esportazione PDF non disponibile");

    // Preview keeps working.
    session.set_field("client_name", "Rossi Srl");
    assert!(session.surface().to_html().contains("Rossi Srl"));

    let err = session.export().unwrap_err();
    assert!(matches!(
        err,
        AppError::Export(ExportError::CapabilityUnavailable(ref reason)) if reason == "pdf library missing"
    ));
    assert!(session.sink().files.is_empty());

    let notices = session.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, TemplateVariant::FreightOffer.unavailable_notice());
    assert!(session.notices().is_empty());
}

#[test]
fn redacted_field_shows_in_preview_but_not_in_export() {
    let mut session = session(TemplateVariant::Generic);
    session.set_field("title", "Offer");
    session.set_field("notes", "Internal margin 12% [hide]");

    assert!(session.surface().to_html().contains("Internal margin 12%"));

    session.export().unwrap();
    let pdf = &session.sink().files[0].1;
    let needle = b"Internal margin";
    assert!(!pdf.windows(needle.len()).any(|w| w == needle));
}
