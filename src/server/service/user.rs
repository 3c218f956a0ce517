use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error, model::db::UserModel},
};

/// Public view of a user, without the password hash.
pub fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's public information
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to look up
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(user_dto))
    }
}
