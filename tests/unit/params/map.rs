use super::*;

#[test]
fn iteration_is_sorted_regardless_of_insertion_order() {
    let mut a = ParamMap::new();
    a.put("type", "upload");
    a.put("public_id", "sample");
    a.put("eager", "w_100");

    let mut b = ParamMap::new();
    b.put("eager", "w_100");
    b.put("type", "upload");
    b.put("public_id", "sample");

    assert_eq!(a, b);
    assert_eq!(
        a.keys().collect::<Vec<_>>(),
        vec!["eager", "public_id", "type"]
    );
    assert_eq!(a.to_signing_string(), b.to_signing_string());
}

#[test]
fn add_omits_empty_values_but_put_keeps_them() {
    let mut m = ParamMap::new();
    m.add("format", "");
    m.add("tags", Vec::<String>::new());
    m.add_opt::<&str>("notification_url", None);
    assert!(m.is_empty());

    m.put("format", "");
    assert_eq!(m.get_text("format"), Some(""));
}

#[test]
fn put_overwrites() {
    let mut m = ParamMap::new();
    assert!(m.put("x", 1_i32).is_none());
    assert_eq!(m.put("x", 2_i32), Some(ParamValue::from("1")));
    assert_eq!(m.get_text("x"), Some("2"));
    assert_eq!(m.len(), 1);
}

#[test]
fn scalars_render_as_decimal_and_literal_booleans() {
    let mut m = ParamMap::new();
    m.add("strict", false);
    m.add("width", 640_i32);
    m.add("ratio", 0.5_f64);
    assert_eq!(m.get_text("strict"), Some("false"));
    assert_eq!(m.get_text("width"), Some("640"));
    assert_eq!(m.get_text("ratio"), Some("0.5"));
}

#[test]
fn signing_string_joins_lists_and_escapes_nested_maps() {
    let mut context = std::collections::BTreeMap::new();
    context.insert("caption".to_string(), "a=b|c".to_string());
    context.insert("alt".to_string(), "cat".to_string());

    let mut m = ParamMap::new();
    m.add("tags", vec!["b".to_string(), "a".to_string()]);
    m.add("context", &context);
    m.put("empty", "");
    m.add("public_id", "sample");

    assert_eq!(
        m.to_signing_string(),
        r"context=alt=cat|caption=a\=b\|c&public_id=sample&tags=b,a"
    );
}

#[test]
fn serializes_as_ordered_json_object() {
    let mut m = ParamMap::new();
    m.add("transformation", "w_100");
    m.add("allowed_for_strict", true);
    m.add("tags", vec!["x".to_string()]);
    let s = serde_json::to_string(&m).unwrap();
    assert_eq!(
        s,
        r#"{"allowed_for_strict":"true","tags":["x"],"transformation":"w_100"}"#
    );
}
