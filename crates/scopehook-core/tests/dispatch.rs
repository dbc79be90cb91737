mod common;

use common::{notification, Call, Recorder};
use scopehook_core::{
    dispatch, sign, DispatchError, DispatchOutcome, Notification, Receipt, Receiver, SecretKey,
    VerifyResult,
};

#[test]
fn scope_created_invokes_handler_once() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "ScopeCreated"), ("appId", "a1"), ("scopeId", "s1")]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Processed));
    assert_eq!(recorder.calls(), vec![Call::Created("a1".into(), "s1".into())]);
}

#[test]
fn scope_deleted_invokes_handler_once() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "ScopeDeleted"), ("appId", "a1"), ("scopeId", "s1")]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Processed));
    assert_eq!(recorder.calls(), vec![Call::Deleted("a1".into(), "s1".into())]);
}

#[test]
fn scope_joined_passes_user() {
    let recorder = Recorder::default();
    let fields = notification(&[
        ("type", "ScopeJoined"),
        ("appId", "a1"),
        ("scopeId", "s1"),
        ("userId", "u9"),
    ]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Processed));
    assert_eq!(
        recorder.calls(),
        vec![Call::Joined("a1".into(), "s1".into(), "u9".into())]
    );
}

#[test]
fn absent_identifiers_arrive_empty() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "ScopeLeft")]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Processed));
    assert_eq!(
        recorder.calls(),
        vec![Call::Left(String::new(), String::new(), String::new())]
    );
}

#[test]
fn future_type_is_rejected_not_fatal() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "SomeFutureType")]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Rejected));
    assert_eq!(recorder.calls(), vec![Call::Unknown("SomeFutureType".into())]);
}

#[test]
fn empty_notification_is_ignored() {
    let recorder = Recorder::default();

    assert_eq!(
        dispatch(&Notification::default(), &recorder),
        Ok(DispatchOutcome::Ignored)
    );
    assert_eq!(recorder.calls(), vec![Call::Missing]);
}

#[test]
fn missing_type_wins_over_bad_timestamp() {
    let recorder = Recorder::default();
    let fields = notification(&[("timestamp", "garbage")]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Ignored));
}

#[test]
fn invalid_timestamp_fails_before_handler() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "ScopeCreated"), ("timestamp", "not-a-number")]);

    assert_eq!(
        dispatch(&fields, &recorder),
        Err(DispatchError::InvalidTimestamp {
            raw: "not-a-number".into()
        })
    );
    assert!(recorder.calls().is_empty());
}

#[test]
fn invalid_timestamp_also_blocks_unknown_types() {
    let recorder = Recorder::default();
    let fields = notification(&[("type", "Other"), ("timestamp", "x")]);

    assert!(dispatch(&fields, &recorder).is_err());
    assert!(recorder.calls().is_empty());
}

#[test]
fn timestamp_reaches_handler_context() {
    let recorder = Recorder::default();
    let fields = notification(&[
        ("type", "ScopeCreated"),
        ("timestamp", "1400000000.5"),
    ]);

    dispatch(&fields, &recorder).unwrap();
    assert_eq!(*recorder.timestamps.borrow(), vec![Some(1_400_000_000)]);
}

#[test]
fn unknown_fields_do_not_affect_routing() {
    let recorder = Recorder::default();
    let fields = notification(&[
        ("type", "ScopeDeleted"),
        ("appId", "a1"),
        ("scopeId", "s1"),
        ("region", "eu"),
    ]);

    assert_eq!(dispatch(&fields, &recorder), Ok(DispatchOutcome::Processed));
    assert_eq!(recorder.calls(), vec![Call::Deleted("a1".into(), "s1".into())]);
}

#[test]
fn end_to_end_scope_left() {
    let key = SecretKey::new("secret");
    let base = notification(&[
        ("type", "ScopeLeft"),
        ("appId", "app1"),
        ("scopeId", "room1"),
        ("userId", "bob"),
    ]);
    let signature = sign(&key, &base);
    let fields: Notification = base.iter().chain([("signature", signature.as_str())]).collect();

    let recorder = Recorder::default();
    let receiver = Receiver::new(key);
    assert_eq!(
        receiver.receive(&fields, &recorder),
        Ok(Receipt::Dispatched(DispatchOutcome::Processed))
    );
    assert_eq!(
        recorder.calls(),
        vec![Call::Left("app1".into(), "room1".into(), "bob".into())]
    );
}

#[test]
fn receiver_skips_dispatch_when_unauthenticated() {
    let receiver = Receiver::new(SecretKey::new("secret"));
    let recorder = Recorder::default();

    let unsigned = notification(&[("type", "ScopeCreated")]);
    assert_eq!(
        receiver.receive(&unsigned, &recorder),
        Ok(Receipt::Unauthenticated(VerifyResult::MissingSignature))
    );

    let forged = notification(&[("type", "ScopeCreated"), ("signature", "00")]);
    assert_eq!(
        receiver.receive(&forged, &recorder),
        Ok(Receipt::Unauthenticated(VerifyResult::SignatureMismatch))
    );
    assert!(recorder.calls().is_empty());
}

#[test]
fn receiver_keeps_the_key_it_was_built_with() {
    let receiver = Receiver::new(SecretKey::new("secret"));
    assert_eq!(receiver.key().expose(), "secret");
    assert!(!receiver.key().is_empty());
    assert!(Receiver::new(SecretKey::new("")).key().is_empty());
}

#[test]
fn handler_set_works_through_smart_pointers() {
    let recorder = std::sync::Arc::new(Recorder::default());
    let fields = notification(&[("type", "ScopeCreated"), ("appId", "a"), ("scopeId", "s")]);

    dispatch(&fields, &recorder).unwrap();
    dispatch(&fields, &&*recorder).unwrap();
    assert_eq!(recorder.calls().len(), 2);
}
