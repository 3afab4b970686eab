use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::providers::{ProviderAvailability, ProviderKind};
use crate::auth::session::{CurrentSession, IssuedSession, Session, DEMO_PROVIDER};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::LoginType;
use crate::query::{parse_param, require_text};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub name: String,
    pub email: String,
    pub login_type: LoginType,
    pub provider: Option<String>,
}

/// GET /api/auth/providers
pub async fn handle_providers(State(state): State<AppState>) -> Json<ProviderAvailability> {
    Json(state.providers.availability())
}

/// POST /api/auth/session
/// Stands in for the identity provider callback: the handshake itself is
/// delegated, this only mints the portal's own session.
pub async fn handle_sign_in(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignInRequest>,
) -> Result<(StatusCode, Json<IssuedSession>), AppError> {
    require_text("name", &req.name)?;
    require_text("email", &req.email)?;

    let provider: Option<ProviderKind> = parse_param("provider", req.provider.as_deref())?;
    let provider_id = match provider {
        Some(kind) => {
            if !state.providers.is_configured(kind) {
                return Err(AppError::Validation(format!(
                    "Configuration: {kind} sign-in is not configured"
                )));
            }
            // Social sign-in is only offered on the user side of the portal.
            if req.login_type == LoginType::Hr {
                return Err(AppError::Validation(format!(
                    "{kind} sign-in is only available for user accounts"
                )));
            }
            kind.id()
        }
        None => DEMO_PROVIDER,
    };

    let issued = state
        .sessions
        .issue(&req.name, &req.email, req.login_type, provider_id)?;
    Ok((StatusCode::CREATED, Json(issued)))
}

/// GET /api/auth/session
pub async fn handle_get_session(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(session)
}
