//! In-memory post and tag store - used when no database is configured.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{DateOrder, NewPost, Post, PostFilter, Tag};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository, TagRepository};

#[derive(Default)]
struct StoreState {
    posts: BTreeMap<i32, Post>,
    tags: BTreeMap<i32, Tag>,
    /// (post_id, tag_id)
    links: BTreeSet<(i32, i32)>,
    last_post_id: i32,
    last_tag_id: i32,
}

/// Posts, tags and their links behind one async RwLock.
///
/// Implements both [`PostRepository`] and [`TagRepository`].
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        let slot = state.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        state.posts.remove(&id).ok_or(RepoError::NotFound)?;
        state.links.retain(|(post_id, _)| *post_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.values().cloned().collect())
    }

    async fn find_filtered(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;

        let tag_id = match filter.tag_name() {
            Some(name) => match state.tags.values().find(|tag| tag.name == name) {
                Some(tag) => Some(tag.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|post| tag_id.is_none_or(|tag_id| state.links.contains(&(post.id, tag_id))))
            .filter(|post| !filter.published_only || post.published)
            .cloned()
            .collect();

        // Stable sort: equal dates keep id order.
        match filter.date_order {
            DateOrder::Asc => posts.sort_by(|a, b| a.publication_date.cmp(&b.publication_date)),
            DateOrder::Desc => posts.sort_by(|a, b| b.publication_date.cmp(&a.publication_date)),
        }

        Ok(posts)
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        state.last_post_id += 1;

        let post = Post::from_new(state.last_post_id, new_post);
        state.posts.insert(post.id, post.clone());

        tracing::debug!(post_id = post.id, "Post inserted (in-memory)");
        Ok(post)
    }

    async fn attach_tag(&self, post_id: i32, tag_id: i32) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        if !state.posts.contains_key(&post_id) || !state.tags.contains_key(&tag_id) {
            return Err(RepoError::NotFound);
        }
        Ok(state.links.insert((post_id, tag_id)))
    }

    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let state = self.state.read().await;
        let mut tags: Vec<Tag> = state
            .links
            .iter()
            .filter(|(linked_post, _)| *linked_post == post_id)
            .filter_map(|(_, tag_id)| state.tags.get(tag_id).cloned())
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError> {
        let state = self.state.read().await;
        Ok(state.tags.values().find(|tag| tag.name == name).cloned())
    }

    async fn create(&self, name: &str) -> Result<Tag, RepoError> {
        let mut state = self.state.write().await;
        if state.tags.values().any(|tag| tag.name == name) {
            return Err(RepoError::Constraint(format!("tag '{name}' already exists")));
        }

        state.last_tag_id += 1;
        let tag = Tag {
            id: state.last_tag_id,
            name: name.to_owned(),
        };
        state.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }
}
