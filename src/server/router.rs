//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/csrf` - Get the session's CSRF token
/// - `POST /api/auth/register` - Register a new account
/// - `POST /api/auth/login` - Log in with username and password
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/trips` - List the current user's trips
/// - `POST /api/trips` - Generate and store a new trip
/// - `GET /api/trips/{trip_id}` - Get a trip with its days
/// - `DELETE /api/trips/{trip_id}` - Delete a trip
/// - `POST /trip/{trip_id}/day/{day}/regenerate` - Regenerate one day of a trip
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, ai_client };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Voyager", description = "Voyager API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::trip::TRIP_TAG, description = "Trip and itinerary API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::csrf))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::trip::list_trips,
            controller::trip::create_trip
        ))
        .routes(routes!(
            controller::trip::get_trip,
            controller::trip::delete_trip
        ))
        .routes(routes!(controller::trip::regenerate_day))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
