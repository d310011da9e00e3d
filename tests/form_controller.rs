mod common;

use common::{
    controller, fill_valid_fields, init_tracing, png_upload, CollectingNotifier,
    RecordingBackend, ScriptedClassifier, Verdict,
};
use formflow::form::{FormPhase, PictureState, SubmitOutcome};
use formflow::models::image::ImageUpload;
use formflow::models::strength::StrengthLevel;
use formflow::notify::Severity;

#[tokio::test]
async fn test_successful_submit_calls_backend_once_and_resets() {
    init_tracing();
    let classifier = ScriptedClassifier::approving();
    let backend = RecordingBackend::succeeding();
    let notifier = CollectingNotifier::new();
    let mut form = controller(classifier.clone(), backend.clone(), notifier.clone());

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;
    assert!(form.picture().is_approved());
    assert!(form.can_submit());

    let outcome = form.submit().await;
    match outcome {
        SubmitOutcome::Completed(result) => assert!(result.success),
        other => panic!("expected completed submit, got {:?}", other),
    }

    assert_eq!(backend.call_count(), 1);
    assert_eq!(classifier.call_count(), 1);

    // all transient state is back to initial values
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.picture(), &PictureState::Idle);
    assert!(form.preview().is_none());
    assert!(form.input().full_name.is_empty());
    assert!(form.input().password.is_empty());
    assert_eq!(form.strength().level, StrengthLevel::None);
    assert!(form.field_errors().is_empty());

    let last = notifier.last().unwrap();
    assert_eq!(last.severity, Severity::Success);
    assert_eq!(last.title, "Registration successful!");
}

#[tokio::test]
async fn test_failed_registration_retains_form_state() {
    init_tracing();
    let backend = RecordingBackend::failing();
    let notifier = CollectingNotifier::new();
    let mut form = controller(ScriptedClassifier::approving(), backend.clone(), notifier.clone());

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;

    let outcome = form.submit().await;
    match outcome {
        SubmitOutcome::Completed(result) => assert!(!result.success),
        other => panic!("expected completed submit, got {:?}", other),
    }

    // the filled-in form stays available for correction and resubmission
    assert_eq!(form.input().full_name, "Jane Doe");
    assert!(form.picture().is_approved());
    assert_eq!(notifier.last().unwrap().title, "Registration failed");

    // a second attempt reaches the backend again
    let second = form.submit().await;
    assert!(matches!(second, SubmitOutcome::Completed(_)));
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_submit_blocked_by_schema_validation() {
    init_tracing();
    let backend = RecordingBackend::succeeding();
    let mut form = controller(
        ScriptedClassifier::approving(),
        backend.clone(),
        CollectingNotifier::new(),
    );

    fill_valid_fields(&mut form);
    form.set_email("not-an-email");
    form.select_picture(png_upload()).await;

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(backend.call_count(), 0);
    assert!(form.field_error("email").is_some());
}

#[tokio::test]
async fn test_submit_without_picture_sets_required_error() {
    init_tracing();
    let backend = RecordingBackend::succeeding();
    let mut form = controller(
        ScriptedClassifier::approving(),
        backend.clone(),
        CollectingNotifier::new(),
    );

    fill_valid_fields(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(backend.call_count(), 0);
    assert_eq!(
        form.field_error("profile_picture"),
        Some("Profile picture is required.")
    );
}

#[tokio::test]
async fn test_inappropriate_picture_blocks_submit() {
    init_tracing();
    let classifier = ScriptedClassifier::new(vec![Verdict::Reject("contains violence")]);
    let backend = RecordingBackend::succeeding();
    let notifier = CollectingNotifier::new();
    let mut form = controller(classifier, backend.clone(), notifier.clone());

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;

    // the verdict surfaces as both a field error and a notification
    assert!(form.picture().is_rejected());
    assert_eq!(form.field_error("profile_picture"), Some("contains violence"));
    assert_eq!(notifier.last().unwrap().title, "Inappropriate Image");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(backend.call_count(), 0);
    assert_eq!(notifier.last().unwrap().title, "Cannot Submit");
}

#[tokio::test]
async fn test_replacing_rejected_picture_unblocks_submit() {
    init_tracing();
    let classifier = ScriptedClassifier::new(vec![Verdict::Reject("nope"), Verdict::Approve]);
    let backend = RecordingBackend::succeeding();
    let mut form = controller(classifier, backend.clone(), CollectingNotifier::new());

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;
    assert!(form.picture().is_rejected());

    form.select_picture(png_upload()).await;
    assert!(form.picture().is_approved());
    assert!(form.field_error("profile_picture").is_none());

    assert!(matches!(form.submit().await, SubmitOutcome::Completed(_)));
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_provider_failure_surfaces_generic_reason() {
    init_tracing();
    let classifier = ScriptedClassifier::new(vec![Verdict::Fail]);
    let backend = RecordingBackend::succeeding();
    let mut form = controller(classifier, backend.clone(), CollectingNotifier::new());

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;

    assert!(form.picture().is_rejected());
    assert_eq!(
        form.field_error("profile_picture"),
        Some("An error occurred while analyzing the image.")
    );
    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_oversized_file_rejected_before_moderation() {
    init_tracing();
    let classifier = ScriptedClassifier::approving();
    let mut form = controller(
        classifier.clone(),
        RecordingBackend::succeeding(),
        CollectingNotifier::new(),
    );

    let oversized = ImageUpload::new("big.png", "image/png", vec![0u8; 3 * 1024 * 1024]);
    form.select_picture(oversized).await;

    assert_eq!(classifier.call_count(), 0);
    assert_eq!(form.picture(), &PictureState::Idle);
    assert_eq!(
        form.field_error("profile_picture"),
        Some("File size must be less than 2MB.")
    );
}

#[tokio::test]
async fn test_wrong_mime_type_rejected_before_moderation() {
    init_tracing();
    let classifier = ScriptedClassifier::approving();
    let mut form = controller(
        classifier.clone(),
        RecordingBackend::succeeding(),
        CollectingNotifier::new(),
    );

    let gif = ImageUpload::new("anim.gif", "image/gif", vec![0u8; 1024 * 1024]);
    form.select_picture(gif).await;

    assert_eq!(classifier.call_count(), 0);
    assert_eq!(form.picture(), &PictureState::Idle);
    assert_eq!(
        form.field_error("profile_picture"),
        Some("Only JPG, PNG, and WEBP formats are allowed.")
    );
}

#[tokio::test]
async fn test_invalid_selection_supersedes_previous_approval() {
    init_tracing();
    let classifier = ScriptedClassifier::approving();
    let mut form = controller(
        classifier.clone(),
        RecordingBackend::succeeding(),
        CollectingNotifier::new(),
    );

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;
    assert!(form.picture().is_approved());

    // picking an invalid file clears the earlier approval
    let gif = ImageUpload::new("anim.gif", "image/gif", vec![0u8; 64]);
    form.select_picture(gif).await;
    assert_eq!(form.picture(), &PictureState::Idle);
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_backend_receives_validated_payload() {
    init_tracing();
    let backend = RecordingBackend::succeeding();
    let mut form = controller(
        ScriptedClassifier::approving(),
        backend.clone(),
        CollectingNotifier::new(),
    );

    fill_valid_fields(&mut form);
    form.select_picture(png_upload()).await;
    form.submit().await;

    let payload = backend.last_call().unwrap();
    assert_eq!(payload.email, "jane@example.com");
    assert_eq!(payload.full_name, "Jane Doe");
    assert!(payload.picture.is_some());
    assert!(payload.accepted_terms);
}
