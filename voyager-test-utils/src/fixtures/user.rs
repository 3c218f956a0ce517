//! User account fixtures.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is `TEST_PASSWORD`.
    ///
    /// # Arguments
    /// - `username` - Unique username for the account
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The inserted user
    /// - `Err(TestError::PasswordHash)` - Hashing the fixture password failed
    /// - `Err(TestError::DbErr)` - Insert failed, for example on a duplicate username
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Fetch a user by username, used to look up users created through `TestBuilder::with_user`.
    pub async fn find_user(&self, username: &str) -> Result<Option<UserModel>, TestError> {
        use sea_orm::{ColumnTrait, QueryFilter};

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.setup.db)
            .await?)
    }
}
