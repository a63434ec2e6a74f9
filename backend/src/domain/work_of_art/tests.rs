//! Tests for work of art validation and revision.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

use crate::domain::ErrorCode;

#[fixture]
fn submission() -> WorkOfArtSubmission {
    WorkOfArtSubmission {
        challenge_id: None,
        title: "Harbour at dusk".to_owned(),
        description: Some("Study in blue".to_owned()),
        image_url: "https://img.example/harbour.png".to_owned(),
        medium: "Watercolors".to_owned(),
        materials: vec![MaterialSubmission {
            name: "Cotman pan set".to_owned(),
            brand: Some("Winsor & Newton".to_owned()),
            ..MaterialSubmission::default()
        }],
    }
}

#[fixture]
fn author() -> User {
    User::new(
        UserId::random(),
        UserName::new("octocat").expect("fixture name"),
    )
}

#[rstest]
fn material_without_medium_stays_unset(submission: WorkOfArtSubmission) {
    let content = WorkOfArtContent::try_from(submission).expect("valid submission");
    assert_eq!(content.medium, Medium::Watercolors);
    let material = content.materials.first().expect("one material");
    assert_eq!(material.medium, None);
    assert_eq!(material.brand.as_deref(), Some("Winsor & Newton"));
}

#[rstest]
fn rejects_unknown_medium(mut submission: WorkOfArtSubmission) {
    submission.medium = "clay".to_owned();
    let err = WorkOfArtContent::try_from(submission).expect_err("unknown medium");
    assert_eq!(
        err,
        WorkOfArtValidationError::UnknownMedium {
            value: "clay".to_owned()
        }
    );
}

#[rstest]
fn rejects_unknown_material_medium(mut submission: WorkOfArtSubmission) {
    submission.materials.push(MaterialSubmission {
        name: "Mystery tube".to_owned(),
        medium: Some("tempera".to_owned()),
        ..MaterialSubmission::default()
    });
    let err = WorkOfArtContent::try_from(submission).expect_err("unknown material medium");
    assert!(matches!(
        err,
        WorkOfArtValidationError::UnknownMaterialMedium { index: 1, .. }
    ));
}

#[rstest]
#[case::title(|s: &mut WorkOfArtSubmission| s.title = "  ".to_owned(), WorkOfArtValidationError::EmptyTitle)]
#[case::image(|s: &mut WorkOfArtSubmission| s.image_url = String::new(), WorkOfArtValidationError::EmptyImageUrl)]
fn rejects_blank_required_fields(
    mut submission: WorkOfArtSubmission,
    #[case] mutate: fn(&mut WorkOfArtSubmission),
    #[case] expected: WorkOfArtValidationError,
) {
    mutate(&mut submission);
    assert_eq!(WorkOfArtContent::try_from(submission), Err(expected));
}

#[rstest]
#[case(Some("  ".to_owned()), None)]
#[case(Some(" weekly-42 ".to_owned()), Some("weekly-42"))]
#[case(None, None)]
fn normalises_challenge_id(
    mut submission: WorkOfArtSubmission,
    #[case] raw: Option<String>,
    #[case] expected: Option<&str>,
) {
    submission.challenge_id = raw;
    let content = WorkOfArtContent::try_from(submission).expect("valid submission");
    assert_eq!(content.challenge_id.as_deref(), expected);
}

#[test]
fn validation_error_maps_to_invalid_request_with_field() {
    let error: Error = WorkOfArtValidationError::EmptyMaterialName { index: 2 }.into();
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details");
    assert_eq!(details["field"], "materials[2].name");
    assert_eq!(details["code"], "empty_field");
}

#[rstest]
fn revise_keeps_identity_and_creation_time(author: User, submission: WorkOfArtSubmission) {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("timestamp");
    let content = WorkOfArtContent::try_from(submission.clone()).expect("valid");
    let original = WorkOfArt::new(WorkOfArtId::random(), &author, content, created_at);

    let mut edited = submission;
    edited.title = "Harbour at dawn".to_owned();
    edited.medium = "ink".to_owned();
    let revised = original
        .clone()
        .revise(WorkOfArtContent::try_from(edited).expect("valid"));

    assert_eq!(revised.id, original.id);
    assert_eq!(revised.user_id, original.user_id);
    assert_eq!(revised.user_name, original.user_name);
    assert_eq!(revised.created_at, created_at);
    assert_eq!(revised.title, "Harbour at dawn");
    assert_eq!(revised.medium, Medium::Ink);
}

#[test]
fn material_serialises_kind_as_type() {
    let material = Material {
        name: "Brush".to_owned(),
        identifier: None,
        brand: None,
        line: None,
        kind: Some("round".to_owned()),
        medium: Some(Medium::Oil),
    };
    let value = serde_json::to_value(&material).expect("serialise");
    assert_eq!(value["type"], "round");
    assert_eq!(value["medium"], "oil");
}
