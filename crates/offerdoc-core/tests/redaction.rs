use offerdoc_core::models::{FormFieldSet, RedactionPolicy, ResolvedForm};

#[test]
fn marked_field_is_stripped_for_preview_and_omitted_for_export() {
    let form: FormFieldSet = [("notes", "Internal discount [hide]applies")]
        .into_iter()
        .collect();
    let resolved = ResolvedForm::resolve(&form, &RedactionPolicy::default());

    assert_eq!(resolved.preview("notes"), "Internal discount applies");
    assert_eq!(resolved.export("notes"), "");
    assert!(resolved.is_redacted("notes"));
}

#[test]
fn unmarked_field_is_identical_in_both_paths() {
    let form: FormFieldSet = [("price", "€ 1.200,00")].into_iter().collect();
    let resolved = ResolvedForm::resolve(&form, &RedactionPolicy::default());

    assert_eq!(resolved.preview("price"), "€ 1.200,00");
    assert_eq!(resolved.export("price"), "€ 1.200,00");
    assert!(!resolved.is_redacted("price"));
}

#[test]
fn every_marker_occurrence_is_removed() {
    let value = RedactionPolicy::new("##").resolve("a##b##c");
    assert!(value.redacted);
    assert_eq!(value.preview_text(), "abc");
    assert_eq!(value.export_text(), "");
}

#[test]
fn empty_marker_disables_redaction() {
    let value = RedactionPolicy::new("").resolve("[hide] text");
    assert!(!value.redacted);
    assert_eq!(value.export_text(), "[hide] text");
}

#[test]
fn absent_fields_read_as_blank() {
    let resolved = ResolvedForm::resolve(&FormFieldSet::new(), &RedactionPolicy::default());
    assert_eq!(resolved.preview("title"), "");
    assert_eq!(resolved.export("title"), "");
    assert!(resolved.field("title").is_none());
}
