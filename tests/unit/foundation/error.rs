use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        ImagenError::invalid_color("nope").to_string(),
        "invalid color: nope"
    );
    assert!(
        ImagenError::invalid_size("400", "expected WxH")
            .to_string()
            .starts_with("invalid size \"400\":")
    );
    assert!(
        ImagenError::invalid_segment("x:1", "unknown prefix")
            .to_string()
            .contains("unknown prefix")
    );
    assert_eq!(
        ImagenError::InsufficientColors {
            mode: "gradient",
            got: 1
        }
        .to_string(),
        "gradient requires at least 2 colors, got 1"
    );
    assert_eq!(
        ImagenError::unsupported_format("webp").to_string(),
        "unsupported format: webp"
    );
    assert!(ImagenError::render("x").to_string().contains("render error:"));
}

#[test]
fn client_errors_are_parse_failures_only() {
    assert!(ImagenError::invalid_color("x").is_client_error());
    assert!(ImagenError::invalid_size("x", "y").is_client_error());
    assert!(ImagenError::invalid_segment("x", "y").is_client_error());
    assert!(!ImagenError::unsupported_format("webp").is_client_error());
    assert!(!ImagenError::render("x").is_client_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ImagenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
