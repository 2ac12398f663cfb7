use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{rescue_request, rescue_team, user},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rescue Board",
        description = "Disaster-relief rescue request and team coordination API"
    ),
    tags(
        (name = "rescue-request", description = "Rescue request intake and triage lifecycle"),
        (name = "rescue-team", description = "Rescue team management"),
        (name = "user", description = "User provisioning and identity")
    )
)]
pub struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
///
/// # Arguments
/// - `cors_origin` - Allowed origin, any origin is allowed when `None`
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting its state
/// - `Err(AppError::ConfigErr)` - `cors_origin` is not a valid header value
pub fn router(cors_origin: Option<&str>) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            rescue_request::create_rescue_request,
            rescue_request::get_rescue_requests
        ))
        .routes(routes!(rescue_request::get_rescue_request_statistics))
        .routes(routes!(
            rescue_request::get_rescue_request,
            rescue_request::update_rescue_request,
            rescue_request::delete_rescue_request
        ))
        .routes(routes!(rescue_request::approve_rescue_request))
        .routes(routes!(rescue_request::reject_rescue_request))
        .routes(routes!(rescue_request::assign_rescue_team))
        .routes(routes!(rescue_request::complete_rescue_mission))
        .routes(routes!(
            rescue_team::create_rescue_team,
            rescue_team::get_rescue_teams
        ))
        .routes(routes!(rescue_team::get_available_rescue_teams))
        .routes(routes!(
            rescue_team::get_rescue_team,
            rescue_team::update_rescue_team,
            rescue_team::delete_rescue_team
        ))
        .routes(routes!(user::create_user))
        .routes(routes!(user::get_current_user))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let Some(origin) = origin else {
        return Ok(layer.allow_origin(Any));
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidValue {
            name: "CORS_ORIGIN".to_string(),
            value: origin.to_string(),
        })?;

    Ok(layer.allow_origin(origin))
}
