use scopehook_core::{sign, signing_input, verify, Notification, SecretKey, VerifyResult};

fn scope_left() -> Notification {
    [
        ("type", "ScopeLeft"),
        ("appId", "app1"),
        ("scopeId", "room1"),
        ("userId", "bob"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn signature_matches_golden_value() {
    assert_eq!(
        sign(&SecretKey::new("secret"), &scope_left()),
        "6485e1b12bf4f91aa379c9cdbbe8a28a4ba64d6818740b75ba09fd1935aa3e10"
    );
}

#[test]
fn signing_input_matches_golden_text() {
    assert_eq!(
        signing_input(&SecretKey::new("secret"), &scope_left()),
        "secret\nappId=app1\nscopeId=room1\ntype=ScopeLeft\nuserId=bob"
    );
}

#[test]
fn empty_key_and_empty_fields_hash_the_empty_string() {
    assert_eq!(
        sign(&SecretKey::default(), &Notification::default()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn key_only_hashes_the_key() {
    assert_eq!(
        sign(&SecretKey::new("secret"), &Notification::default()),
        "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
    );
}

#[test]
fn numeric_timestamp_text_is_signed_verbatim() {
    let fields: Notification = [
        ("type", "ScopeCreated"),
        ("appId", "a1"),
        ("scopeId", "s1"),
        ("timestamp", "1400000000.5"),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        sign(&SecretKey::new("k"), &fields),
        "7d05c460cfff6196341d1429ac4206d6c59034e3095ce2fa274981ef9f45c74d"
    );
}

#[test]
fn golden_signature_verifies() {
    let base = scope_left();
    let mut fields: Vec<(&str, &str)> = base.iter().collect();
    fields.push((
        "signature",
        "6485e1b12bf4f91aa379c9cdbbe8a28a4ba64d6818740b75ba09fd1935aa3e10",
    ));
    let notification: Notification = fields.into_iter().collect();
    assert_eq!(
        verify(&SecretKey::new("secret"), &notification),
        VerifyResult::Authentic
    );
    assert_eq!(
        verify(&SecretKey::new("other"), &notification),
        VerifyResult::SignatureMismatch
    );
}
