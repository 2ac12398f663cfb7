//! User provisioning and identity lookups.
//!
//! Users are created by an admin, or once at startup for the bootstrap admin.
//! Each user gets an opaque bearer credential that is returned only at creation.

use entity::user::UserRole;
use rand::Rng;
use sea_orm::{ConnectionTrait, DbErr, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{conflict::ConflictError, AppError},
    model::user::{CreateUserParams, NewUser, User},
};

const ACCESS_TOKEN_LENGTH: usize = 48;

pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Provisions a user with a freshly generated access token.
    ///
    /// # Arguments
    /// - `params` - Email, display name and role of the new user
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and its access token
    /// - `Err(AppError::Validation)` - Invalid email or blank name
    /// - `Err(AppError::Conflict(DuplicateEmail))` - Email already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<(User, String), AppError> {
        let params = params.validate()?;
        let access_token = generate_access_token();

        let user = self
            .insert(NewUser {
                email: params.email,
                name: params.name,
                role: params.role,
                access_token: access_token.clone(),
            })
            .await?;

        tracing::info!(user_id = %user.id, role = ?user.role, "Provisioned user");

        Ok((user, access_token))
    }

    /// Creates the bootstrap admin with a configured token if no admin exists yet.
    ///
    /// # Arguments
    /// - `email` - Email of the bootstrap admin
    /// - `access_token` - Configured bearer credential for the admin
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin was created
    /// - `Ok(None)` - An admin already exists, nothing was changed
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        access_token: &str,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let params = CreateUserParams {
            email: email.to_string(),
            name: "Administrator".to_string(),
            role: UserRole::Admin,
        }
        .validate()?;

        let user = self
            .insert(NewUser {
                email: params.email,
                name: params.name,
                role: params.role,
                access_token: access_token.to_string(),
            })
            .await?;

        Ok(Some(user))
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&user.email).await?.is_some() {
            return Err(ConflictError::DuplicateEmail(user.email).into());
        }

        let email = user.email.clone();
        repo.create(user)
            .await
            .map_err(|err| map_duplicate_email(err, email))
    }
}

fn map_duplicate_email(err: DbErr, email: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConflictError::DuplicateEmail(email).into(),
        _ => err.into(),
    }
}

/// Generates a random alphanumeric bearer credential.
///
/// # Returns
/// - `String` - A 48-character string of letters and digits
fn generate_access_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..ACCESS_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
