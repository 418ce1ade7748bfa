use super::*;

#[test]
fn decodes_status_dimensions_and_breakpoints() {
    let r = ExplicitResult::from_json_str(
        r#"{"status":"pending","width":640,"height":480,"responsive_breakpoints":[{"breakpoints":[{"width":100}]}]}"#,
    )
    .unwrap();
    assert_eq!(r.status, "pending");
    assert_eq!(r.width, 640);
    assert_eq!(r.height, 480);
    assert_eq!(r.responsive_breakpoints.len(), 1);
    assert_eq!(r.responsive_breakpoints[0].breakpoints.len(), 1);
    assert_eq!(r.responsive_breakpoints[0].breakpoints[0].width, 100);
}

#[test]
fn numeric_field_sent_as_string_is_rejected() {
    let err = ExplicitResult::from_json_str(r#"{"width":"640"}"#).unwrap_err();
    assert!(matches!(err, CloudinaryError::Deserialization { .. }));
    assert_eq!(err.field(), Some("width"));
}

#[test]
fn breakpoint_errors_carry_the_full_path() {
    let err = ExplicitResult::from_json_str(
        r#"{"responsive_breakpoints":[{"breakpoints":[{"width":100},{"width":"x"}]}]}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.field(),
        Some("responsive_breakpoints[0].breakpoints[1].width")
    );
}

#[test]
fn colors_and_predominant_decode_as_pairs() {
    let r = ExplicitResult::from_document(&serde_json::json!({
        "colors": [["#162E02", 6.7], ["#385B0C", 6.3]],
        "predominant": {
            "google": [["yellow", 52.5], ["green", 21.1]],
            "cloudinary": [["white", 33]]
        }
    }))
    .unwrap();
    assert_eq!(
        r.colors[0],
        ColorShare {
            color: "#162E02".to_string(),
            percent: 6.7
        }
    );
    let predominant = r.predominant.unwrap();
    assert_eq!(predominant.google.len(), 2);
    assert_eq!(predominant.cloudinary[0].percent, 33.0);

    let err = ExplicitResult::from_document(&serde_json::json!({ "colors": [["#fff"]] }))
        .unwrap_err();
    assert_eq!(err.field(), Some("colors[0]"));

    let err = ExplicitResult::from_document(&serde_json::json!({ "colors": [[1, 2]] }))
        .unwrap_err();
    assert_eq!(err.field(), Some("colors[0][0]"));
}

#[test]
fn nested_analysis_blocks_decode() {
    let r = ExplicitResult::from_document(&serde_json::json!({
        "faces": [[98, 74, 61, 83], [140, 130, 52, 71]],
        "quality_analysis": { "focus": 0.9, "noise": 0.1 },
        "cinemagraph_analysis": { "cinemagraph_score": 0 },
        "accessibility_analysis": {
            "colorblind_accessibility_score": 0.8,
            "colorblind_accessibility_analysis": {
                "distinct_edges": 0.9,
                "distinct_colors": 0.7,
                "most_indistinct_pair": ["#E5DD9A", "#F0E7A8"]
            }
        },
        "profiling_data": [{
            "cpu": 33,
            "real": 28,
            "action": {
                "action": "resize",
                "parameter": "w_100",
                "presize": [640, 480],
                "postsize": [100, 75]
            }
        }],
        "info": { "detection": { "captioning": { "status": "complete" } } },
        "illustration_score": 0.25,
        "pages": 3
    }))
    .unwrap();

    assert_eq!(r.faces, vec![vec![98, 74, 61, 83], vec![140, 130, 52, 71]]);
    assert_eq!(r.quality_analysis.as_ref().map(|q| q.focus), Some(0.9));
    assert_eq!(
        r.cinemagraph_analysis.as_ref().map(|c| c.cinemagraph_score),
        Some(0.0)
    );
    let pair = &r
        .accessibility_analysis
        .as_ref()
        .and_then(|a| a.colorblind_accessibility_analysis.as_ref())
        .unwrap()
        .most_indistinct_pair;
    assert_eq!(pair, &vec!["#E5DD9A".to_string(), "#F0E7A8".to_string()]);
    let action = r.profiling_data[0].action.as_ref().unwrap();
    assert_eq!(action.postsize, vec![100, 75]);
    assert!(r.info.as_ref().and_then(|i| i.detection.as_ref()).is_some());
    assert_eq!(r.illustration_score, 0.25);
    assert_eq!(r.pages, 3);
}

#[test]
fn upload_layer_is_populated_from_the_same_document() {
    let r = ExplicitResult::from_document(&serde_json::json!({
        "public_id": "sample",
        "bytes": 1024,
        "eager": [{ "transformation": "c_fill,w_100", "width": 100, "url": "http://a/b.jpg" }]
    }))
    .unwrap();
    assert_eq!(r.upload.public_id, "sample");
    assert_eq!(r.upload.bytes, 1024);
    assert_eq!(r.eager[0].transformation, "c_fill,w_100");
    assert_eq!(r.upload.base.raw["public_id"], "sample");
}

#[test]
#[allow(deprecated)]
fn deprecated_aliases_forward_to_canonical_fields() {
    let mut r = ExplicitResult::from_document(&serde_json::json!({
        "image_metadata": { "Make": "Canon" },
        "eager": [{ "url": "http://a/b.jpg", "secure_url": "https://a/b.jpg" }]
    }))
    .unwrap();
    assert_eq!(r.metadata().get("Make").map(String::as_str), Some("Canon"));

    let mut replaced = BTreeMap::new();
    replaced.insert("Model".to_string(), "EOS".to_string());
    r.set_metadata(replaced);
    assert!(r.image_metadata.contains_key("Model"));
    assert!(!r.metadata().contains_key("Make"));

    let eager = &mut r.eager[0];
    assert_eq!(eager.uri(), "http://a/b.jpg");
    assert_eq!(eager.secure_uri(), "https://a/b.jpg");
    eager.set_uri("http://c/d.jpg");
    eager.set_secure_uri("https://c/d.jpg");
    assert_eq!(eager.url, "http://c/d.jpg");
    assert_eq!(eager.secure_url, "https://c/d.jpg");
}
