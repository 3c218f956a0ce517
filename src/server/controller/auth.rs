use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CsrfTokenDto, ErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{csrf::SessionCsrfToken, user::SessionUserId},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Returns the session's CSRF token, minting one on first request
///
/// Mutating routes expect this token in the `X-CSRFToken` header.
#[utoipa::path(
    get,
    path = "/api/auth/csrf",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "CSRF token for this session", body = CsrfTokenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn csrf(session: Session) -> Result<impl IntoResponse, Error> {
    let csrf_token = SessionCsrfToken::get_or_create(&session).await?;

    Ok((StatusCode::OK, Json(CsrfTokenDto { csrf_token })))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Username or password failed validation", body = ErrorDto),
        (status = 403, description = "CSRF token missing or invalid", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;

    let user = AuthService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with a username and password
///
/// On success the session ID is rotated and the user ID stored in the session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Username or password empty", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "CSRF token missing or invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;

    let user = AuthService::new(&state.db).login(payload).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 404, description = "No user logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    match get_user_from_session(&state, &session).await {
        Ok(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        Err(Error::AuthError(AuthError::UserNotInSession))
        | Err(Error::AuthError(AuthError::UserNotInDatabase(_))) => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
