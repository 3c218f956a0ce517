//! Account registration and credential checks.

pub mod password;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr};
use validator::Validate;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        model::db::UserModel,
        error::{auth::AuthError, Error},
        service::{
            auth::password::{hash_password, verify_password},
            user::user_dto,
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// # Arguments
    /// - `payload` - Username and plain text password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(Error::ValidationError)` - Username or password fails length rules
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Username already registered
    /// - `Err(Error)` - Hashing or database failure
    pub async fn register(&self, payload: RegisterDto) -> Result<UserDto, Error> {
        payload.validate()?;

        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_username(&payload.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(payload.username).into());
        }

        let password_hash = hash_password(&payload.password)?;
        let user = insert_user(&user_repository, &payload.username, &password_hash).await?;

        tracing::info!("Registered user ID {} ({})", user.id, user.username);

        Ok(user_dto(user))
    }

    /// Check a username and password pair.
    ///
    /// Unknown usernames and wrong passwords both yield [`AuthError::InvalidCredentials`].
    pub async fn login(&self, payload: LoginDto) -> Result<UserDto, Error> {
        payload.validate()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(&payload.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&payload.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user_dto(user))
    }
}

/// Insert a user, reporting a lost race on the unique username index as
/// [`AuthError::UsernameTaken`].
async fn insert_user<C: ConnectionTrait>(
    user_repository: &UserRepository<'_, C>,
    username: &str,
    password_hash: &str,
) -> Result<UserModel, Error> {
    user_repository
        .create(username, password_hash)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AuthError::UsernameTaken(username.to_string()).into()
            }
            _ => err.into(),
        })
}
