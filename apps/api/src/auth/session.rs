use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{LoginType, SessionUser};
use crate::state::AppState;

/// Provider label used for sign-ins that did not go through a social provider.
pub const DEMO_PROVIDER: &str = "demo";

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub sub: String,
    pub jti: Uuid,
    pub name: String,
    pub email: String,
    pub login_type: LoginType,
    pub provider: String,
    pub iat: i64,
    pub exp: i64,
}

/// Session as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub provider: String,
    pub expires: DateTime<Utc>,
}

impl From<SessionClaims> for Session {
    fn from(claims: SessionClaims) -> Self {
        Session {
            user: SessionUser {
                id: claims.sub,
                name: claims.name,
                email: claims.email,
                login_type: claims.login_type,
            },
            provider: claims.provider,
            expires: DateTime::from_timestamp(claims.exp, 0).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Signs and verifies HS256 session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl: Duration::try_hours(ttl_hours).unwrap_or(Duration::MAX),
        }
    }

    /// Subjects are stable per provider and email, so a returning user
    /// keeps their applications.
    pub fn subject_for(provider: &str, email: &str) -> String {
        format!("{provider}:{}", email.trim().to_lowercase())
    }

    pub fn issue(
        &self,
        name: &str,
        email: &str,
        login_type: LoginType,
        provider: &str,
    ) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let expires = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("session lifetime overflows the clock"))
        })?;
        let claims = SessionClaims {
            sub: Self::subject_for(provider, email),
            jti: Uuid::new_v4(),
            name: name.to_string(),
            email: email.trim().to_string(),
            login_type,
            provider: provider.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign session: {e}")))?;
        tracing::info!(session_id = %claims.jti, provider, login_type = ?login_type, "Session issued");
        Ok(IssuedSession {
            token,
            session: Session::from(claims),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Session, AppError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid session: {e}")))?;
        Ok(Session::from(data.claims))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;
    header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header format".to_string()))
}

/// Any signed-in user.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(CurrentSession(state.sessions.verify(token)?))
    }
}

/// A signed-in HR user. Other roles get 403.
#[derive(Debug, Clone)]
pub struct HrSession(pub Session);

#[axum::async_trait]
impl FromRequestParts<AppState> for HrSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;
        if session.user.login_type != LoginType::Hr {
            return Err(AppError::Forbidden);
        }
        Ok(HrSession(session))
    }
}
