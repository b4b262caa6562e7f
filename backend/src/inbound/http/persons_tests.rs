//! Handler tests for the person endpoints, run against the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::inbound::http::test_utils::{in_memory_state, state_with_repo, test_app};

/// Repository whose backing store is unreachable.
struct UnreachableRepository;

#[async_trait]
impl PersonRepository for UnreachableRepository {
    async fn insert(&self, _draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }

    async fn find_by_id(&self, _id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }

    async fn find_first_by_last_name(
        &self,
        _last_name: &str,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }

    async fn list_ordered(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }

    async fn update(
        &self,
        _id: PersonId,
        _draft: &PersonDraft,
    ) -> Result<Person, PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }

    async fn delete(&self, _id: PersonId) -> Result<(), PersonRepositoryError> {
        Err(PersonRepositoryError::connection("refused"))
    }
}

fn person_body(first_name: &str, last_name: &str) -> PersonRequest {
    PersonRequest {
        first_name: Some(Value::from(first_name)),
        last_name: Some(Value::from(last_name)),
    }
}

#[actix_web::test]
async fn create_returns_created_record_with_all_fields() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(person_body("Anna", "Smith"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["first_name"], "Anna");
    assert_eq!(body["last_name"], "Smith");
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[rstest]
#[case(json!({}), &["first_name", "last_name"])]
#[case(json!({"first_name": "", "last_name": "Smith"}), &["first_name"])]
#[case(json!({"first_name": "Anna", "last_name": "x".repeat(101)}), &["last_name"])]
#[case(json!({"first_name": 123, "last_name": ""}), &["last_name"])]
#[case(json!({"first_name": true, "last_name": null}), &["first_name", "last_name"])]
#[case(json!({"first_name": ["Anna"], "last_name": {"name": "Smith"}}), &["first_name", "last_name"])]
#[actix_web::test]
async fn create_rejects_invalid_names_with_field_details(
    #[case] payload: Value,
    #[case] fields: &[&str],
) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    let details = body["details"].as_object().expect("details object");
    assert_eq!(details.len(), fields.len());
    for field in fields {
        let messages = details[*field].as_array().expect("message list");
        assert_eq!(messages.len(), 1);
    }
}

#[actix_web::test]
async fn missing_fields_use_required_message() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(json!({"first_name": "Anna"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["details"],
        json!({"last_name": ["This field is required."]})
    );
}

#[actix_web::test]
async fn null_and_non_text_names_are_reported_per_field() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(json!({"first_name": null, "last_name": false}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["details"],
        json!({
            "first_name": ["This field may not be null."],
            "last_name": ["Not a valid string."]
        })
    );
}

#[actix_web::test]
async fn numeric_names_are_stored_as_text() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(json!({"first_name": 42, "last_name": "Smith"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["first_name"], "42");
}

#[actix_web::test]
async fn names_are_trimmed_before_storage() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let create = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(person_body("  Anna ", " Smith  "))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, create).await;
    assert_eq!(created["first_name"], "Anna");
    assert_eq!(created["last_name"], "Smith");

    let greet = actix_test::TestRequest::get()
        .uri("/api/hello/Smith/")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, greet).await;
    assert_eq!(body["message"], "Hello Anna Smith!");
}

#[actix_web::test]
async fn read_only_fields_in_body_are_ignored() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(json!({
            "id": 999,
            "first_name": "Anna",
            "last_name": "Smith",
            "created_at": "2000-01-01T00:00:00Z",
            "nickname": "Annie"
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_ne!(body["id"], 999);
    assert_ne!(body["created_at"], "2000-01-01T00:00:00Z");
}

#[actix_web::test]
async fn list_orders_by_last_then_first_name() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for (first, last) in [("Zoe", "Baker"), ("Anna", "Smith"), ("Adam", "Baker")] {
        let req = actix_test::TestRequest::post()
            .uri("/api/hello/persons/")
            .set_json(person_body(first, last))
            .to_request();
        actix_test::call_service(&app, req).await;
    }

    let req = actix_test::TestRequest::get()
        .uri("/api/hello/persons/")
        .to_request();
    let listed: Vec<PersonResponse> = actix_test::call_and_read_body_json(&app, req).await;

    let names: Vec<(&str, &str)> = listed
        .iter()
        .map(|p| (p.first_name.as_str(), p.last_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![("Adam", "Baker"), ("Zoe", "Baker"), ("Anna", "Smith")]
    );
}

#[actix_web::test]
async fn unknown_id_is_empty_not_found_with_trace_header() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    for req in [
        actix_test::TestRequest::get().uri("/api/hello/persons/41/"),
        actix_test::TestRequest::delete().uri("/api/hello/persons/41/"),
        actix_test::TestRequest::put()
            .uri("/api/hello/persons/41/")
            .set_json(person_body("A", "B")),
        actix_test::TestRequest::get().uri("/api/hello/persons/abc/"),
    ] {
        let res = actix_test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        assert!(actix_test::read_body(res).await.is_empty());
    }
}

#[actix_web::test]
async fn update_replaces_names_and_advances_updated_at() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(person_body("Anna", "Smith"))
        .to_request();
    let created: PersonResponse = actix_test::call_and_read_body_json(&app, req).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/hello/persons/{}/", created.id))
        .set_json(person_body("Anna", "Jones"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let updated: PersonResponse = actix_test::read_body_json(res).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last_name, "Jones");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[actix_web::test]
async fn update_requires_both_names() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(person_body("Anna", "Smith"))
        .to_request();
    let created: PersonResponse = actix_test::call_and_read_body_json(&app, req).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/hello/persons/{}/", created.id))
        .set_json(json!({"first_name": "Edited"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["details"],
        json!({"last_name": ["This field is required."]})
    );
}

#[actix_web::test]
async fn delete_returns_no_content_then_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .set_json(person_body("Anna", "Smith"))
        .to_request();
    let created: PersonResponse = actix_test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/hello/persons/{}/", created.id);

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/hello/persons/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"first_name\": ")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn unreachable_store_is_service_unavailable() {
    let state = state_with_repo(Arc::new(UnreachableRepository));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/hello/persons/")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
    assert!(body["traceId"].is_string());
}

#[actix_web::test]
async fn greeting_degrades_when_store_is_unreachable() {
    let state = state_with_repo(Arc::new(UnreachableRepository));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/hello/Smith/")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Who is this 'Smith' you're talking about?");
}
