use async_trait::async_trait;

use crate::domain::{NewPost, NewTag, NewUser, Post, PostTag, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Overwrite every column of an existing entity.
    ///
    /// Returns `RepoError::NotFound` if no row has the entity's ID.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Insert a new user and return it with its assigned ID.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// All users, ordered by last name and then first name.
    async fn list_ordered(&self) -> Result<Vec<User>, RepoError>;

    /// Delete the user's posts and then the user, as one unit of work.
    async fn delete_with_posts(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post, stamping its creation time.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Posts owned by a user, newest first.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

/// Tag repository. Tags have no HTTP surface yet.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    async fn create(&self, tag: NewTag) -> Result<Tag, RepoError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError>;

    /// Associate a tag with a post.
    async fn attach(&self, link: PostTag) -> Result<(), RepoError>;

    /// Tags attached to a post, ordered by name.
    async fn tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;
}
