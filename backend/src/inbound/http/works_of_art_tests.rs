//! Tests for work of art handlers.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::{Medium, User, UserName, WorkOfArtContent};
use crate::inbound::http::test_utils::{
    MockPorts, session_cookie, sign_in_request, sign_in_resource, test_session_middleware,
};

macro_rules! sign_in {
    ($app:expr, $login:expr) => {
        session_cookie(&test::call_service(&$app, sign_in_request($login).to_request()).await)
    };
}

macro_rules! init_app {
    ($ports:expr) => {
        test::init_service(
            App::new()
                .app_data($ports.into_state())
                .wrap(test_session_middleware())
                .service(sign_in_resource())
                .service(
                    web::scope("/api")
                        .service(get_work_of_art)
                        .service(list_works_of_art)
                        .service(create_work_of_art)
                        .service(update_work_of_art)
                        .service(delete_work_of_art),
                ),
        )
        .await
    };
}

#[fixture]
fn octocat() -> User {
    User::new(UserId::random(), UserName::new("octocat").expect("valid name"))
}

fn sample_work(author: &User) -> WorkOfArt {
    let content = WorkOfArtContent {
        challenge_id: None,
        title: "Harbour at dusk".to_owned(),
        description: Some("Quick study".to_owned()),
        image_url: "https://img.example/harbour.png".to_owned(),
        medium: Medium::Watercolors,
        materials: vec![Material {
            name: "Cotman pan set".to_owned(),
            identifier: None,
            brand: Some("Winsor & Newton".to_owned()),
            line: None,
            kind: Some("paint".to_owned()),
            medium: None,
        }],
    };
    let created_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    WorkOfArt::new(WorkOfArtId::random(), author, content, created_at)
}

#[rstest]
#[actix_web::test]
async fn get_returns_full_representation(octocat: User) {
    let work = sample_work(&octocat);
    let id = work.id;
    let mut ports = MockPorts::default();
    ports
        .works
        .expect_fetch()
        .withf(move |requested| *requested == id)
        .times(1)
        .return_once(move |_| Ok(Some(work)));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/woa/{id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["user"], octocat.id().to_string());
    assert!(body.get("userId").is_none());
    assert_eq!(body["userName"], "octocat");
    assert_eq!(body["medium"], "watercolors");
    assert_eq!(body["materials"][0]["type"], "paint");
    assert_eq!(body["materials"][0]["medium"], Value::Null);
    assert_eq!(body["challengeId"], Value::Null);
    assert_eq!(body["createdAt"], "2024-05-01T12:00:00+00:00");
}

#[rstest]
#[case("not-a-uuid", false)]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
#[actix_web::test]
async fn get_missing_work_is_not_found(#[case] id: &str, #[case] reaches_port: bool) {
    let mut ports = MockPorts::default();
    ports
        .works
        .expect_fetch()
        .times(usize::from(reaches_port))
        .returning(|_| Ok(None));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/woa/{id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_prefers_user_id_over_mediums(octocat: User) {
    let summary = WorkOfArtSummary::from(sample_work(&octocat));
    let owner = *octocat.id();
    let mut ports = MockPorts::default();
    ports
        .works
        .expect_list_by_user()
        .withf(move |user_id| *user_id == owner)
        .times(1)
        .return_once(move |_| Ok(vec![summary]));
    ports.works.expect_list_all().never();
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/woa?mediums=oil&userId={owner}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let listed = body.as_array().expect("array body");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"], "Harbour at dusk");
    assert_eq!(listed[0]["user"], owner.to_string());
    assert!(listed[0].get("materials").is_none());
}

#[rstest]
#[case("/api/woa", vec![])]
#[case("/api/woa?mediums=oil&mediums=INK", vec![Medium::Oil, Medium::Ink])]
#[case("/api/woa?mediums=oil,clay,pan%20pastels", vec![Medium::Oil, Medium::PanPastels])]
#[actix_web::test]
async fn list_passes_medium_filter(#[case] uri: &str, #[case] expected: Vec<Medium>) {
    let mut ports = MockPorts::default();
    ports
        .works
        .expect_list_all()
        .withf(move |mediums| mediums == expected.as_slice())
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri(uri).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_with_malformed_user_id_is_empty() {
    let mut ports = MockPorts::default();
    ports.works.expect_list_by_user().never();
    ports.works.expect_list_all().never();
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/woa?userId=nobody")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn create_provisions_author_and_sets_location(octocat: User) {
    let author = octocat.clone();
    let created = sample_work(&octocat);
    let created_id = created.id;
    let mut ports = MockPorts::default();
    ports
        .profile_commands
        .expect_find_or_create()
        .withf(|login| login.as_ref() == "octocat")
        .times(1)
        .return_once(move |_| Ok(author));
    ports
        .work_commands
        .expect_create()
        .withf(|submission, author| {
            submission.medium == "watercolors"
                && submission.materials.len() == 1
                && submission.materials[0].medium.is_none()
                && author.name().as_ref() == "octocat"
        })
        .times(1)
        .return_once(move |_, _| Ok(created));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "octocat");

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/woa")
            .cookie(cookie)
            .set_json(json!({
                "title": "Harbour at dusk",
                "imageUrl": "https://img.example/harbour.png",
                "medium": "watercolors",
                "materials": [{"name": "Cotman pan set", "type": "paint"}]
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(location, Some(format!("/api/woa/{created_id}")));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], created_id.to_string());
}

#[actix_web::test]
async fn create_requires_session() {
    let mut ports = MockPorts::default();
    ports.work_commands.expect_create().never();
    let app = init_app!(ports);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/woa")
            .set_json(json!({"title": "t", "imageUrl": "u", "medium": "oil"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn update_by_stranger_is_forbidden(octocat: User) {
    let work = sample_work(&octocat);
    let mut ports = MockPorts::default();
    ports
        .work_commands
        .expect_update()
        .withf(|_, _, acting| acting.as_ref() == "hubot")
        .times(1)
        .return_once(|_, _, _| Err(Error::forbidden("you can change only your own work of art")));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "hubot");

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/woa/{}", work.id))
            .cookie(cookie)
            .set_json(json!({"title": "mine", "imageUrl": "u", "medium": "oil"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "forbidden");
}

#[rstest]
#[actix_web::test]
async fn delete_returns_id_as_json_string(octocat: User) {
    let id = sample_work(&octocat).id;
    let mut ports = MockPorts::default();
    ports
        .work_commands
        .expect_delete()
        .withf(move |requested, acting| *requested == id && acting.as_ref() == "octocat")
        .times(1)
        .return_once(move |_, _| Ok(id));
    let app = init_app!(ports);
    let cookie = sign_in!(app, "octocat");

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/woa/{id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!(id.to_string()));
}
