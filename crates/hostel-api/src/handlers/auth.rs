//! Auth handlers: signup, login, logout.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use hostel_auth::session::LoginResult;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::AuthResponse;
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<SignupRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;
    let result = state
        .session_manager
        .signup(&req.username, &req.email, &req.password)
        .await?;
    Ok(sign_in(&state, jar, result))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;
    let result = state
        .session_manager
        .login(&req.username, &req.password, req.role)
        .await?;
    Ok(sign_in(&state, jar, result))
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    state.session_manager.logout(auth.session_id).await?;

    let cookie = Cookie::build((state.config.session.cookie_name.clone(), "")).path("/");
    Ok((jar.remove(cookie), Redirect::to("/")))
}

fn sign_in(state: &AppState, jar: CookieJar, result: LoginResult) -> (CookieJar, Json<AuthResponse>) {
    let session_config = &state.config.session;
    let cookie = Cookie::build((session_config.cookie_name.clone(), result.token.clone()))
        .path("/")
        .http_only(true)
        .secure(session_config.cookie_secure)
        .same_site(SameSite::Lax);

    let redirect = if result.user.is_admin() { "/admin/overview" } else { "/" };
    let body = AuthResponse {
        status: "success".to_string(),
        redirect: redirect.to_string(),
        token: result.token,
    };
    (jar.add(cookie), Json(body))
}
