//! User entity for SeaORM.

use blogly_core::domain::DEFAULT_IMAGE_URL;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub last_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for blogly_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            image_url: model
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<blogly_core::domain::User> for ActiveModel {
    fn from(user: blogly_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            image_url: Set(Some(user.image_url)),
        }
    }
}

/// Conversion from a Domain draft; the ID is left to the database.
impl From<blogly_core::domain::NewUser> for ActiveModel {
    fn from(user: blogly_core::domain::NewUser) -> Self {
        Self {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            image_url: Set(Some(user.image_url)),
        }
    }
}
