use offerdoc_core::dates::format_document_date;
use offerdoc_core::error::CoreError;
use offerdoc_core::models::{FieldKind, FormFieldSet, Section, TemplateVariant};

#[test]
fn parses_flat_json_object() {
    let form = FormFieldSet::from_json(
        r#"{"title": "Offer", "recipient": "Acme", "weight": 1200, "urgent": true, "notes": null}"#,
    )
    .unwrap();

    assert_eq!(form.get("title"), "Offer");
    assert_eq!(form.get("weight"), "1200");
    assert_eq!(form.get("urgent"), "true");
    assert_eq!(form.get("notes"), "");
    assert_eq!(form.get("missing"), "");
    assert_eq!(form.len(), 5);
}

#[test]
fn rejects_nested_values() {
    let err = FormFieldSet::from_json(r#"{"items": ["a", "b"]}"#).unwrap_err();
    assert!(matches!(err, CoreError::NonStringField(name) if name == "items"));
}

#[test]
fn rejects_non_object_root() {
    assert!(FormFieldSet::from_json("[1, 2]").is_err());
    assert!(FormFieldSet::from_json("not json").is_err());
}

#[test]
fn serializes_as_flat_object() {
    let form: FormFieldSet = [("b", "2"), ("a", "1")].into_iter().collect();
    let json = serde_json::to_string(&form).unwrap();
    assert_eq!(json, r#"{"a":"1","b":"2"}"#);
}

#[test]
fn iso_dates_use_fixed_locale_format() {
    assert_eq!(format_document_date("2024-03-05"), "05/03/2024");
    assert_eq!(format_document_date(" 2024-12-31 "), "31/12/2024");
    assert_eq!(format_document_date("end of month"), "end of month");
    assert_eq!(format_document_date(""), "");
}

#[test]
fn every_variant_lists_all_sections_in_order() {
    for variant in [TemplateVariant::Generic, TemplateVariant::FreightOffer] {
        let sections: Vec<Section> = variant.sections().iter().map(|s| s.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        for section in Section::ALL {
            assert_eq!(variant.section(section).section, section);
        }
    }
}

#[test]
fn identifying_field_is_part_of_the_catalogue() {
    for variant in [TemplateVariant::Generic, TemplateVariant::FreightOffer] {
        assert!(variant.field(variant.identifying_field()).is_some());
    }
    assert_eq!(
        TemplateVariant::Generic.field("content").map(|f| f.kind),
        Some(FieldKind::Paragraph)
    );
}

#[test]
fn variant_names_parse() {
    assert_eq!(
        TemplateVariant::parse("generic").unwrap(),
        TemplateVariant::Generic
    );
    assert_eq!(
        TemplateVariant::parse("freight_offer").unwrap(),
        TemplateVariant::FreightOffer
    );
    assert!(matches!(
        TemplateVariant::parse("invoice"),
        Err(CoreError::UnknownVariant(_))
    ));
}
