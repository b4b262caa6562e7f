//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer plus the
//! schema wrappers for domain types. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::hello::MessageResponse;
use crate::inbound::http::persons::{PersonRequest, PersonResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello backend API",
        description = "Person records, greetings by last name, and a weather summary."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::create_person,
        crate::inbound::http::persons::get_person,
        crate::inbound::http::persons::update_person,
        crate::inbound::http::persons::delete_person,
        crate::inbound::http::hello::hello_world,
        crate::inbound::http::hello::greet_person,
        crate::inbound::http::weather::weather_summary,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PersonRequest,
        PersonResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "persons", description = "Person record management"),
        (name = "hello", description = "Greetings"),
        (name = "weather", description = "Current weather summary"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
