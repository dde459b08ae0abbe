use label_grid::*;
use std::collections::BTreeSet;

fn map(pairs: &[(&str, RawValue)]) -> ConfigMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_override_wins_over_default() {
    let field = ConfigField::new(
        "page_width",
        FieldKind::Float,
        Some("210mm".into()),
        Some("200mm".into()),
    )
    .unwrap();
    assert_eq!(field.value(), Some(&RawValue::from("200mm")));
    assert_eq!(field.number(), Some(200.0));
    assert_eq!(field.unit(), Some("mm"));
}

#[test]
fn test_default_used_without_override() {
    let field = ConfigField::new("page_rows", FieldKind::Integer, Some("10".into()), None).unwrap();
    assert_eq!(field.value(), Some(&RawValue::from("10")));
    assert_eq!(field.integer(), Some(10));
    assert_eq!(field.unit(), None);
}

#[test]
fn test_unset_field_is_not_parsed() {
    let field = ConfigField::new("page_top_margin", FieldKind::Float, None, None).unwrap();
    assert_eq!(field.value(), None);
    assert_eq!(field.number(), None);
    assert_eq!(field.unit(), None);
}

#[test]
fn test_text_field_keeps_raw_value() {
    let field = ConfigField::new("title", FieldKind::Text, Some("Rack A".into()), None).unwrap();
    assert_eq!(field.value(), Some(&RawValue::from("Rack A")));
    assert_eq!(field.number(), None);
}

#[test]
fn test_field_errors_propagate() {
    let err = ConfigField::new("page_rows", FieldKind::Integer, None, Some("3.5".into()))
        .unwrap_err();
    match err {
        LabelError::NonIntegral(msg) => assert!(msg.contains("page_rows")),
        other => panic!("Expected NonIntegral error, got {:?}", other),
    }

    let err = ConfigField::new("page_width", FieldKind::Float, Some("wide".into()), None)
        .unwrap_err();
    assert!(matches!(err, LabelError::Parse(_)));
}

#[test]
fn test_resolve_prefers_override() {
    let default = RawValue::from("1");
    let preferred = RawValue::from("2");
    assert_eq!(resolve(Some(&default), Some(&preferred)), Some(&preferred));
    assert_eq!(resolve(Some(&default), None), Some(&default));
    assert_eq!(resolve(None, None), None);
}

#[test]
fn test_print_config_from_plugin_defaults() {
    let config = PrintConfig::with_overrides(&ConfigMap::new()).unwrap();
    assert_eq!(config.page_rows.integer(), Some(8));
    assert_eq!(config.page_columns.integer(), Some(3));
    assert_eq!(config.page_width.number(), Some(210.0));
    assert_eq!(config.label_height.number(), Some(32.0));
    assert_eq!(
        config.distinct_units(),
        BTreeSet::from(["mm".to_string()])
    );
    assert_eq!(config.shared_unit().unwrap(), "mm");
}

#[test]
fn test_request_overrides_plugin_defaults() {
    let overrides = map(&[
        ("page_columns", RawValue::from("2")),
        ("label_width", RawValue::from("90mm")),
    ]);
    let config = PrintConfig::with_overrides(&overrides).unwrap();
    assert_eq!(config.page_columns.integer(), Some(2));
    assert_eq!(config.label_width.number(), Some(90.0));
    assert_eq!(config.page_rows.integer(), Some(8));
}

#[test]
fn test_mixed_units_rejected() {
    let overrides = map(&[
        ("page_width", RawValue::from("210mm")),
        ("label_width", RawValue::from("2in")),
    ]);
    let config = PrintConfig::with_overrides(&overrides).unwrap();
    assert_eq!(
        config.distinct_units(),
        BTreeSet::from(["in".to_string(), "mm".to_string()])
    );
    assert!(matches!(config.shared_unit(), Err(LabelError::MixedUnits(_))));
}

#[test]
fn test_unitless_config_has_empty_unit() {
    let defaults = map(&[
        ("page_width", RawValue::Integer(100)),
        ("page_height", RawValue::Float(50.0)),
    ]);
    let config = PrintConfig::new(&defaults, &ConfigMap::new()).unwrap();
    assert!(config.distinct_units().is_empty());
    assert_eq!(config.shared_unit().unwrap(), "");
}

#[test]
fn test_effective_values_echo_raw_settings() {
    let overrides = map(&[("page_rows", RawValue::from("4"))]);
    let defaults = map(&[("page_width", RawValue::from("210mm"))]);
    let config = PrintConfig::new(&defaults, &overrides).unwrap();

    let values = config.effective_values();
    assert_eq!(values.len(), 10);
    assert_eq!(values["page_rows"], Some(RawValue::from("4")));
    assert_eq!(values["page_width"], Some(RawValue::from("210mm")));
    assert_eq!(values["page_height"], None);

    let map = config.to_config_map();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_invalid_value_aborts_config() {
    let overrides = map(&[("page_height", RawValue::from("tall"))]);
    assert!(matches!(
        PrintConfig::with_overrides(&overrides),
        Err(LabelError::Parse(_))
    ));
}

#[test]
fn test_counts_must_be_positive() {
    let overrides = map(&[("page_rows", RawValue::Integer(-2))]);
    let config = PrintConfig::with_overrides(&overrides).unwrap();
    assert!(matches!(
        config.count(PrintField::PageRows),
        Err(LabelError::InvalidArguments(_))
    ));
    assert_eq!(config.count(PrintField::PageColumns).unwrap(), Some(3));
}

#[test]
fn test_count_beyond_integer_range_rejected() {
    let overrides = map(&[("page_rows", RawValue::from("100000000000000000000"))]);
    match PrintConfig::with_overrides(&overrides) {
        Err(LabelError::IntegerRange(msg)) => assert!(msg.starts_with("page_rows=")),
        other => panic!("Expected IntegerRange error, got {:?}", other),
    }
}

#[test]
fn test_parse_override_pairs() {
    assert_eq!(
        parse_override("page_width = 200mm").unwrap(),
        Some(("page_width".to_string(), RawValue::from("200mm")))
    );
    assert_eq!(parse_override("page_width=").unwrap(), None);
    assert!(matches!(
        parse_override("paper=A4"),
        Err(LabelError::Config(_))
    ));
    assert!(parse_override("page_width").is_err());

    let overrides =
        overrides_from_pairs(["page_rows=4", "page_rows=5", "page_columns="]).unwrap();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides["page_rows"], RawValue::from("5"));
}

#[test]
fn test_print_field_names_round_trip() {
    for field in PrintField::ALL {
        assert_eq!(PrintField::from_name(field.name()), Some(field));
    }
    assert_eq!(PrintField::PageRows.kind(), FieldKind::Integer);
    assert_eq!(PrintField::PageLeftMargin.kind(), FieldKind::Float);
}
