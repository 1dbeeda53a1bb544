//! User model -> entity

use blog_core::entities::User;
use blog_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            display_name: model.display_name,
            created_at: model.created_at,
        }
    }
}
