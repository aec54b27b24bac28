use offerdoc_core::models::{FormFieldSet, RedactionPolicy, ResolvedForm, TemplateVariant};
use offerdoc_export::backend::DocumentBackend;
use offerdoc_export::paginate::lay_out;
use offerdoc_export::pdf::{encode_win_ansi, PdfWriterBackend};
use offerdoc_export::LayoutConfig;

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|w| *w == needle)
        .count()
}

#[test]
fn writes_one_pdf_page_per_laid_out_page() {
    let content = (0..3000).map(|_| "word").collect::<Vec<_>>().join(" ");
    let form: FormFieldSet = [("title", "Offer"), ("content", content.as_str())]
        .into_iter()
        .collect();
    let resolved = ResolvedForm::resolve(&form, &RedactionPolicy::default());
    let doc = lay_out(&resolved, TemplateVariant::Generic, &LayoutConfig::default());
    assert!(doc.page_count() > 1);

    let bytes = PdfWriterBackend.render(&doc).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let pages = count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages");
    assert_eq!(pages, doc.page_count());
    assert_eq!(count(&bytes, b"(Offer) Tj"), 1);
    assert_eq!(count(&bytes, b"/BaseFont /Helvetica-Bold"), 1);
}

#[test]
fn empty_document_is_rejected() {
    let mut doc = lay_out(
        &ResolvedForm::default(),
        TemplateVariant::Generic,
        &LayoutConfig::default(),
    );
    doc.pages.clear();
    assert!(PdfWriterBackend.render(&doc).is_err());
}

#[test]
fn win_ansi_covers_italian_text_and_currency() {
    assert_eq!(encode_win_ansi("Città"), b"Citt\xe0".to_vec());
    assert_eq!(encode_win_ansi("€ 10"), b"\x80 10".to_vec());
    assert_eq!(encode_win_ansi("l’offerta"), b"l\x92offerta".to_vec());
    assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
}
