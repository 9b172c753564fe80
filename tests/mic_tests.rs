// Host-side tests for the microphone permission state.

use shape_field::core::mic::{MicError, MicStatus};

#[test]
fn starts_pending() {
    let status = MicStatus::default();
    assert_eq!(status, MicStatus::Pending);
    assert!(!status.is_live());
}

#[test]
fn grant_goes_live() {
    let mut status = MicStatus::default();
    status.on_granted();
    assert!(status.is_live());
}

#[test]
fn notice_is_requested_only_once() {
    let mut status = MicStatus::default();
    assert!(status.on_denied());
    assert!(!status.on_denied());
    assert!(!status.on_denied());
    assert_eq!(status, MicStatus::Denied);
}

#[test]
fn errors_describe_the_failure() {
    let e = MicError::PermissionDenied {
        reason: "NotAllowedError".into(),
    };
    assert!(e.to_string().contains("NotAllowedError"));
    assert_eq!(
        MicError::InsecureContext.to_string(),
        "microphone requires a secure context"
    );
}
