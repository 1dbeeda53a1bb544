//! Post model -> entity

use blog_core::entities::Post;
use blog_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            text: model.text,
            group_id: model.group_id.map(Snowflake::new),
            image: model.image,
            rating: model.rating,
            created_at: model.created_at,
        }
    }
}
