//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated via utoipa; the annotations are collected into one OpenAPI
/// document served at `/api/docs/openapi.json` and browsable at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET /api/auth/login`, `/api/auth/callback`, `/api/auth/logout`, `/api/auth/user`
/// - `GET /api/user/characters`, `PUT /api/user/main/{character_id}`
/// - `GET|POST /api/user/api_keys`, `DELETE /api/user/api_keys/{api_id}`
/// - `GET /api/applications/mine`, `GET /api/applications/queue`
/// - `POST /api/applications`, `GET /api/applications/{application_id}`
/// - `POST /api/applications/{application_id}/{action}`
/// - `POST /api/applications/{application_id}/comments`
/// - `PUT|DELETE /api/applications/{application_id}/comments/{comment_id}`
/// - `GET|POST /api/blacklist`, `DELETE /api/blacklist/{entry_id}`
/// - `GET /api/admin/roles`, `PUT|DELETE /api/admin/users/{user_id}/roles/{role}`
/// - `PUT /api/admin/alliances`, `PUT /api/admin/corporations`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, esi_client));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Recruit", description = "Recruit API"), tags(
        (name = controller::auth::AUTH_TAG, description = "EVE Online SSO login"),
        (name = controller::user::USER_TAG, description = "Characters and API keys of the current user"),
        (name = controller::application::RECRUIT_TAG, description = "Applications, review workflow and comments"),
        (name = controller::blacklist::BLACKLIST_TAG, description = "Internal blacklist"),
        (name = controller::admin::ADMIN_TAG, description = "Roles and alliance/corporation records"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::get_user_characters))
        .routes(routes!(controller::user::set_main_character))
        .routes(routes!(
            controller::user::list_api_keys,
            controller::user::add_api_key
        ))
        .routes(routes!(controller::user::remove_api_key))
        .routes(routes!(controller::application::my_applications))
        .routes(routes!(controller::application::application_queue))
        .routes(routes!(controller::application::create_application))
        .routes(routes!(controller::application::view_application))
        .routes(routes!(controller::application::interact))
        .routes(routes!(controller::comment::create_comment))
        .routes(routes!(
            controller::comment::edit_comment,
            controller::comment::delete_comment
        ))
        .routes(routes!(
            controller::blacklist::list_entries,
            controller::blacklist::add_entry
        ))
        .routes(routes!(controller::blacklist::remove_entry))
        .routes(routes!(controller::admin::list_roles))
        .routes(routes!(
            controller::admin::assign_role,
            controller::admin::remove_role
        ))
        .routes(routes!(controller::admin::upsert_alliance))
        .routes(routes!(controller::admin::upsert_corporation))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
