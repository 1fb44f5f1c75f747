use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CoverwallError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CoverwallError::font("x").to_string().contains("font error:"));
    assert!(
        CoverwallError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CoverwallError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
