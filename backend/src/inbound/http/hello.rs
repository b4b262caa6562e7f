//! Greeting handlers.
//!
//! ```text
//! GET /api/hello/
//! GET /api/hello/{last_name}/
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::inbound::http::state::HttpState;

/// Single-message response body shared by the greeting and weather endpoints.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello World!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Static greeting.
#[utoipa::path(
    get,
    path = "/api/hello/",
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tags = ["hello"],
    operation_id = "helloWorld"
)]
#[get("/")]
pub async fn hello_world() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("Hello World!"))
}

/// Greet the first person stored under `last_name`.
///
/// Never fails: unknown names and lookup failures both produce the
/// "who is this" message.
#[utoipa::path(
    get,
    path = "/api/hello/{last_name}/",
    params(("last_name" = String, Path, description = "Exact last name to look up")),
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tags = ["hello"],
    operation_id = "greetPerson"
)]
#[get("/{last_name}/")]
pub async fn greet_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> web::Json<MessageResponse> {
    let greeting = state.persons_query.greet(path.as_str()).await;
    web::Json(MessageResponse::new(greeting.message()))
}
