//! Group model -> entity

use blog_core::entities::Group;
use blog_core::value_objects::Snowflake;

use crate::models::GroupModel;

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: Snowflake::new(model.id),
            title: model.title,
            slug: model.slug,
            description: model.description,
        }
    }
}
