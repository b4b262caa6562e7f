//! Person CRUD handlers.
//!
//! ```text
//! GET    /api/hello/persons/
//! POST   /api/hello/persons/      {"first_name":"Anna","last_name":"Smith"}
//! GET    /api/hello/persons/{id}/
//! PUT    /api/hello/persons/{id}/ {"first_name":"Anna","last_name":"Jones"}
//! DELETE /api/hello/persons/{id}/
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Error, NameInput, Person, PersonDraft, PersonId, PersonValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a person.
///
/// Both names are required on create and on update. Read-only fields such as
/// `id` or `created_at` are ignored if supplied.
///
/// Names stay raw JSON; a `null` or wrongly typed name is reported against its
/// own field.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct PersonRequest {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "Anna")]
    pub first_name: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "Smith")]
    pub last_name: Option<Value>,
}

/// Keep an explicit `null` distinct from an omitted field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Numbers are accepted and read as their decimal text; other non-string
/// values are rejected.
fn name_input(raw: Option<Value>) -> NameInput {
    match raw {
        None => NameInput::Absent,
        Some(Value::Null) => NameInput::Null,
        Some(Value::String(text)) => NameInput::Text(text),
        Some(Value::Number(number)) => NameInput::Text(number.to_string()),
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => NameInput::NotText,
    }
}

impl TryFrom<PersonRequest> for PersonDraft {
    type Error = PersonValidationError;

    fn try_from(value: PersonRequest) -> Result<Self, Self::Error> {
        Self::try_from_inputs(name_input(value.first_name), name_input(value.last_name))
    }
}

/// Person representation returned by every person endpoint.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct PersonResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Anna")]
    pub first_name: String,
    #[schema(example = "Smith")]
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().get(),
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            created_at: person.created_at(),
            updated_at: person.updated_at(),
        }
    }
}

/// Render validation failures as field-keyed message lists.
fn map_person_validation_error(err: PersonValidationError) -> Error {
    let mut details = Map::new();
    for (field, error) in err.field_errors() {
        let messages = details
            .entry(field.as_str())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = messages {
            list.push(Value::String(error.to_string()));
        }
    }
    Error::invalid_request(err.to_string()).with_details(Value::Object(details))
}

/// List all persons ordered by last name, then first name.
#[utoipa::path(
    get,
    path = "/api/hello/persons/",
    responses(
        (status = 200, description = "Persons", body = [PersonResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "listPersons"
)]
#[get("/persons/")]
pub async fn list_persons(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PersonResponse>>> {
    let persons = state.persons_query.list_persons().await?;
    Ok(web::Json(persons.iter().map(PersonResponse::from).collect()))
}

/// Create a person.
#[utoipa::path(
    post,
    path = "/api/hello/persons/",
    request_body = PersonRequest,
    responses(
        (status = 201, description = "Person created", body = PersonResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/persons/")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let draft = PersonDraft::try_from(payload.into_inner()).map_err(map_person_validation_error)?;
    let person = state.persons.create_person(draft).await?;
    Ok(HttpResponse::Created().json(PersonResponse::from(&person)))
}

/// Fetch one person.
#[utoipa::path(
    get,
    path = "/api/hello/persons/{id}/",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person", body = PersonResponse),
        (status = 404, description = "Unknown person; empty body")
    ),
    tags = ["persons"],
    operation_id = "getPerson"
)]
#[get("/persons/{id}/")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PersonResponse>> {
    let id = PersonId::new(path.into_inner());
    let person = state.persons_query.get_person(id).await?;
    Ok(web::Json(PersonResponse::from(&person)))
}

/// Replace both names of a person.
#[utoipa::path(
    put,
    path = "/api/hello/persons/{id}/",
    params(("id" = i64, Path, description = "Person identifier")),
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Person updated", body = PersonResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown person; empty body")
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/persons/{id}/")]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<web::Json<PersonResponse>> {
    let id = PersonId::new(path.into_inner());
    let draft = PersonDraft::try_from(payload.into_inner()).map_err(map_person_validation_error)?;
    let person = state.persons.update_person(id, draft).await?;
    Ok(web::Json(PersonResponse::from(&person)))
}

/// Delete a person.
#[utoipa::path(
    delete,
    path = "/api/hello/persons/{id}/",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Unknown person; empty body")
    ),
    tags = ["persons"],
    operation_id = "deletePerson"
)]
#[delete("/persons/{id}/")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .persons
        .delete_person(PersonId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "persons_tests.rs"]
mod tests;
