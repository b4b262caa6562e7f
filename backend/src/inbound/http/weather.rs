//! Weather summary handler.

use actix_web::{get, web};

use crate::inbound::http::hello::MessageResponse;
use crate::inbound::http::state::HttpState;

/// Message returned whenever no summary is available.
pub const WEATHER_FALLBACK: &str = "Sorry, I couldn't fetch the weather for you :(";

/// Current weather in Hamburg as a single sentence.
#[utoipa::path(
    get,
    path = "/api/weather/",
    responses((status = 200, description = "Weather summary or fallback message", body = MessageResponse)),
    tags = ["weather"],
    operation_id = "weatherSummary"
)]
#[get("/api/weather/")]
pub async fn weather_summary(state: web::Data<HttpState>) -> web::Json<MessageResponse> {
    let message = state
        .weather
        .summary()
        .await
        .unwrap_or_else(|| WEATHER_FALLBACK.to_owned());
    web::Json(MessageResponse::new(message))
}
