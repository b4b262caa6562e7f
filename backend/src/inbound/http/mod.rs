//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod hello;
pub mod persons;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod weather;

use actix_web::web;

pub use error::ApiResult;

/// Register the API routes and extractor configuration.
///
/// Person routes are registered ahead of the `{last_name}/` greeting so
/// `/api/hello/persons/` always reaches the collection endpoint. Health
/// probes are not included; they need `HealthState` app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hello_backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(
            web::scope("/api/hello")
                .service(persons::list_persons)
                .service(persons::create_person)
                .service(persons::get_person)
                .service(persons::update_person)
                .service(persons::delete_person)
                .service(hello::hello_world)
                .service(hello::greet_person),
        )
        .service(weather::weather_summary);
}
