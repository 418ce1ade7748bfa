use super::*;

#[test]
fn get_transform_result_decodes_info_and_derived() {
    let r = GetTransformResult::from_document(&serde_json::json!({
        "name": "c_fill,h_200",
        "allowed_for_strict": true,
        "used": true,
        "named": false,
        "info": [{ "crop": "fill", "height": 200 }],
        "derived": [{
            "public_id": "sample",
            "resource_type": "image",
            "type": "upload",
            "format": "jpg",
            "bytes": 4096,
            "id": "8f2c"
        }],
        "next_cursor": null
    }))
    .unwrap();
    assert_eq!(r.name, "c_fill,h_200");
    assert!(r.allowed_for_strict);
    assert_eq!(r.info[0]["height"], 200);
    assert_eq!(r.derived[0].resource_type, Some(ResourceType::Image));
    assert_eq!(r.derived[0].kind, "upload");
    assert_eq!(r.derived[0].bytes, 4096);
}

#[test]
fn info_must_be_a_list_of_objects() {
    let err = GetTransformResult::from_document(&serde_json::json!({ "info": ["w_100"] }))
        .unwrap_err();
    assert_eq!(err.field(), Some("info[0]"));
}

#[test]
#[allow(deprecated)]
fn strict_alias_forwards_to_allowed_for_strict() {
    let mut r = GetTransformResult::default();
    r.set_strict(true);
    assert!(r.allowed_for_strict);
    r.allowed_for_strict = false;
    assert!(!r.strict());
}

#[test]
fn update_result_layers_on_transform_details() {
    let r = UpdateTransformResult::from_document(&serde_json::json!({
        "message": "updated",
        "allowed_for_strict": true
    }))
    .unwrap();
    assert_eq!(r.message, "updated");
    assert!(r.transform.allowed_for_strict);
    assert_eq!(r.transform.base.raw["message"], "updated");
}
