use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CloudinaryError::validation("transformation", "must be set")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CloudinaryError::deserialization("width", "x")
            .to_string()
            .contains("deserialization error:")
    );
    assert!(
        CloudinaryError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        CloudinaryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn validation_names_the_field() {
    let err = CloudinaryError::validation("transformation", "must be set");
    assert_eq!(err.field(), Some("transformation"));
    assert!(err.to_string().contains("transformation"));
}

#[test]
fn nested_prefixes_deserialization_paths_only() {
    let err = CloudinaryError::deserialization("width", "expected integer").nested_in("eager[0]");
    assert_eq!(err.field(), Some("eager[0].width"));

    let err = CloudinaryError::validation("public_id", "must be set").nested_in("eager[0]");
    assert_eq!(err.field(), Some("public_id"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CloudinaryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.field(), None);
}
