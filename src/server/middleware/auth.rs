//! Bearer credential guard for HTTP handlers.
//!
//! Resolves `Authorization: Bearer <token>` to the calling user. Handlers that
//! allow anonymous access use `optional`, everything else uses `require`.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user::UserRole;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::authorization::ensure_role,
};

pub struct AuthGuard<'a, C: ConnectionTrait> {
    db: &'a C,
    headers: &'a HeaderMap,
}

impl<'a, C: ConnectionTrait> AuthGuard<'a, C> {
    pub fn new(db: &'a C, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires a known credential whose user has one of `roles`.
    ///
    /// An empty `roles` slice accepts any authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - Missing or unknown credential (401)
    /// - `Err(AppError::Forbidden)` - Caller's role is not in `roles` (403)
    pub async fn require(&self, roles: &[UserRole]) -> Result<User, AppError> {
        let Some(user) = self.optional().await? else {
            return Err(AuthError::MissingCredential.into());
        };

        ensure_role(&user, roles)?;

        Ok(user)
    }

    /// Resolves the caller if a credential was sent.
    ///
    /// # Returns
    /// - `Ok(None)` - No `Authorization` header, anonymous caller
    /// - `Ok(Some(User))` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - A credential was sent but is malformed or unknown
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredential)?;

        let user = UserRepository::new(self.db)
            .find_by_access_token(token)
            .await?
            .ok_or(AuthError::UnknownCredential)?;

        Ok(Some(user))
    }
}
