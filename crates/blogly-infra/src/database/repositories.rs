//! Entity-specific repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use blogly_core::domain::{NewPost, NewTag, NewUser, Post, PostTag, Tag, User};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sea_orm_base::{SeaOrmRepository, map_db_err};

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

/// SeaORM tag repository.
pub type SeaOrmTagRepository = SeaOrmRepository<TagEntity>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let created: User = self.insert_draft(user).await?;
        tracing::debug!(user_id = created.id, "Created user");

        Ok(created)
    }

    async fn list_ordered(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_with_posts(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Posts reference the user, so they go first.
        let posts = PostEntity::delete_many()
            .filter(post::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = UserEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(
            user_id = id,
            posts_deleted = posts.rows_affected,
            "Deleted user and their posts"
        );

        Ok(())
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let created: Post = self.insert_draft(post).await?;
        tracing::debug!(post_id = created.id, user_id = created.user_id, "Created post");

        Ok(created)
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn create(&self, tag: NewTag) -> Result<Tag, RepoError> {
        self.insert_draft(tag).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError> {
        let result = TagEntity::find()
            .filter(tag::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn attach(&self, link: PostTag) -> Result<(), RepoError> {
        let active_model: post_tag::ActiveModel = link.into();
        PostTagEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
