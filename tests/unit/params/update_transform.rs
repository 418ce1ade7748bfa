use super::*;

#[test]
fn renders_transformation_and_strict_flag_without_unsafe_update() {
    let params = UpdateTransformParams {
        strict: true,
        ..UpdateTransformParams::new("w_100")
    };
    let map = params.to_param_map().unwrap();

    assert_eq!(map.get_text("transformation"), Some("w_100"));
    assert_eq!(map.get_text("allowed_for_strict"), Some("true"));
    assert!(!map.contains_key("unsafe_update"));
    assert_eq!(map.len(), 2);
}

#[test]
fn false_strict_flag_is_sent_literally() {
    let map = UpdateTransformParams::new("w_100").to_param_map().unwrap();
    assert_eq!(map.get_text("allowed_for_strict"), Some("false"));
}

#[test]
fn unsafe_update_joins_compiled_transform_and_format() {
    let params = UpdateTransformParams {
        strict: true,
        format: Some("jpg".to_string()),
        unsafe_transform: Some(Transformation::new().crop("fill").height(200)),
        ..UpdateTransformParams::new("w_100")
    };
    let map = params.to_param_map().unwrap();

    assert_eq!(map.get_text("unsafe_update"), Some("c_fill,h_200/jpg"));
    assert_eq!(map.get_text("transformation"), Some("w_100"));
    assert_eq!(map.get_text("allowed_for_strict"), Some("true"));
}

#[test]
fn format_is_ignored_without_unsafe_transform() {
    let params = UpdateTransformParams {
        format: Some("jpg".to_string()),
        ..UpdateTransformParams::new("w_100")
    };
    let map = params.to_param_map().unwrap();
    assert!(!map.contains_key("unsafe_update"));
    assert!(!map.contains_key("format"));
}

#[test]
fn unsafe_transform_without_format_has_no_trailing_slash() {
    let params = UpdateTransformParams {
        unsafe_transform: Some(Transformation::new().crop("fill").height(200)),
        ..UpdateTransformParams::new("w_100")
    };
    let map = params.to_param_map().unwrap();
    assert_eq!(map.get_text("unsafe_update"), Some("c_fill,h_200"));
}

#[test]
fn check_rejects_missing_transformation() {
    let params = UpdateTransformParams::default();
    let err = params.check().unwrap_err();
    assert!(matches!(err, CloudinaryError::Validation { .. }));
    assert_eq!(err.field(), Some("transformation"));

    // Rendering validates first and fails the same way.
    let err = params.to_param_map().unwrap_err();
    assert_eq!(err.field(), Some("transformation"));
}

#[test]
fn typed_fields_override_custom_params() {
    let mut params = UpdateTransformParams::new("w_100");
    params.base.add_custom_param("transformation", "w_999");
    params.base.add_custom_param("notification_url", "https://example.com/hook");
    let map = params.to_param_map().unwrap();

    assert_eq!(map.get_text("transformation"), Some("w_100"));
    assert_eq!(
        map.get_text("notification_url"),
        Some("https://example.com/hook")
    );
}

#[test]
fn deserializes_structured_unsafe_transform() {
    let params: UpdateTransformParams = serde_json::from_value(serde_json::json!({
        "transformation": "w_100",
        "strict": true,
        "format": "jpg",
        "unsafe_transform": { "height": 200, "crop": "fill" }
    }))
    .unwrap();
    let map = params.to_param_map().unwrap();
    assert_eq!(map.get_text("unsafe_update"), Some("c_fill,h_200/jpg"));
}
