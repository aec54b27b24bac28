use offerdoc_app::config::{
    AppConfig, LogFormat, load_config_from, load_or_init_config_in, migrate, save_config_to,
};
use offerdoc_core::models::TemplateVariant;
use offerdoc_export::BackendKind;
use serde_json::json;

#[test]
fn missing_file_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config = load_config_from(tmp.path()).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(config.variant, TemplateVariant::Generic);
    assert_eq!(config.suppress_marker, "[hide]");
    assert_eq!(config.backend, BackendKind::Pdf);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn v0_config_gains_suppress_marker() {
    let migrated = migrate(
        json!({ "variant": "freight_offer", "created_at": "2024-05-01T10:00:00Z" }),
        0,
    )
    .unwrap();

    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["suppress_marker"], "[hide]");

    let config: AppConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.variant, TemplateVariant::FreightOffer);
}

#[test]
fn migration_keeps_an_existing_marker() {
    let migrated = migrate(json!({ "suppress_marker": "#private" }), 0).unwrap();
    assert_eq!(migrated["suppress_marker"], "#private");
}

#[test]
fn newer_version_is_rejected() {
    let err = migrate(json!({ "config_version": 7 }), 7).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2]), 0).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.variant = TemplateVariant::FreightOffer;
    config.backend = BackendKind::None;
    config.suppress_marker = "(riservato)".to_string();
    config.layout.margin_mm = 15.0;

    save_config_to(&config, tmp.path()).unwrap();
    let loaded = load_config_from(tmp.path()).unwrap();

    assert_eq!(loaded.variant, TemplateVariant::FreightOffer);
    assert_eq!(loaded.backend, BackendKind::None);
    assert_eq!(loaded.redaction_policy().marker, "(riservato)");
    assert_eq!(loaded.layout.margin_mm, 15.0);
    assert_eq!(loaded.created_at, config.created_at);
    assert!(!tmp.path().join("config.json.tmp").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(tmp.path().join("config.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn partial_layout_overrides_keep_other_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("config.json"),
        r#"{ "config_version": 1, "created_at": "2025-01-01T00:00:00Z", "layout": { "page_width_mm": 148.0 } }"#,
    )
    .unwrap();

    let config = load_config_from(tmp.path()).unwrap();
    assert_eq!(config.layout.page_width_mm, 148.0);
    assert_eq!(config.layout.page_height_mm, 297.0);
}

#[test]
fn first_run_writes_defaults_once() {
    let tmp = tempfile::tempdir().unwrap();
    let first = load_or_init_config_in(tmp.path()).unwrap();
    assert!(tmp.path().join("config.json").exists());

    let second = load_or_init_config_in(tmp.path()).unwrap();
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.suppress_marker, first.suppress_marker);
}
