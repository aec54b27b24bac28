use offerdoc_core::models::TemplateVariant;
use offerdoc_core::slug::slugify;

#[test]
fn punctuation_and_spaces_collapse_to_one_separator() {
    assert_eq!(slugify("Q1 Report!!"), "q1-report");
}

#[test]
fn no_leading_or_trailing_separator() {
    assert_eq!(slugify("  --Offer 2024/17--  "), "offer-2024-17");
}

#[test]
fn non_ascii_characters_act_as_separators() {
    assert_eq!(slugify("Città di Roma"), "citt-di-roma");
}

#[test]
fn empty_and_symbol_only_inputs_slug_to_nothing() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!! ???"), "");
}

#[test]
fn generic_variant_names_file_after_title() {
    let name = TemplateVariant::Generic.filename("Q1 Report!!");
    assert_eq!(name, "q1-report-document.pdf");
}

#[test]
fn freight_variant_prefixes_offerta() {
    let name = TemplateVariant::FreightOffer.filename("OF-2024/031");
    assert_eq!(name, "offerta-of-2024-031.pdf");
}

#[test]
fn empty_identifier_uses_fallback_slug() {
    assert_eq!(
        TemplateVariant::Generic.filename("  "),
        "documento-document.pdf"
    );
    assert_eq!(
        TemplateVariant::FreightOffer.filename(""),
        "offerta-documento.pdf"
    );
}
