use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostFilter, Tag};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an existing entity. `RepoError::NotFound` if it no longer exists.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Every post, in store order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts matching the filter, ordered by publication date.
    async fn find_filtered(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Insert a new post and return it with its generated id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Link a tag to a post. Returns `false` when the link already existed.
    async fn attach_tag(&self, post_id: i32, tag_id: i32) -> Result<bool, RepoError>;

    /// Tags linked to a post.
    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;
}

/// Tag store.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Find a tag by its exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError>;

    /// Create a tag. `RepoError::Constraint` if the name is taken.
    async fn create(&self, name: &str) -> Result<Tag, RepoError>;
}
