//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use blog_core::domain::{DateOrder, NewPost, Post, PostFilter, Tag};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, TagRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::postgres_base::{PostgresBaseRepository, db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find().all(&self.db).await.map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_filtered(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(
            tag = ?filter.tag_name(),
            published_only = filter.published_only,
            date_order = ?filter.date_order,
            "Finding posts"
        );

        let mut query = PostEntity::find();

        if let Some(name) = filter.tag_name() {
            query = query
                .join(JoinType::InnerJoin, post::Relation::PostTag.def())
                .join(JoinType::InnerJoin, post_tag::Relation::Tag.def())
                .filter(tag::Column::Name.eq(name));
        }

        if filter.published_only {
            query = query.filter(post::Column::Published.eq(true));
        }

        let order = match filter.date_order {
            DateOrder::Asc => Order::Asc,
            DateOrder::Desc => Order::Desc,
        };

        let result = query
            .order_by(post::Column::PublicationDate, order)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::debug!(post_id = model.id, "Post inserted");
        Ok(model.into())
    }

    async fn attach_tag(&self, post_id: i32, tag_id: i32) -> Result<bool, RepoError> {
        let existing = PostTagEntity::find_by_id((post_id, tag_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Ok(false);
        }

        let link = post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        };

        match PostTagEntity::insert(link).exec(&self.db).await.map_err(db_err) {
            Ok(_) => Ok(true),
            // Linked concurrently.
            Err(RepoError::Constraint(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .join(JoinType::InnerJoin, tag::Relation::PostTag.def())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError> {
        tracing::debug!(tag = %name, "Finding tag by name");

        let result = TagEntity::find()
            .filter(tag::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, name: &str) -> Result<Tag, RepoError> {
        let active_model = tag::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::debug!(tag_id = model.id, tag = %model.name, "Tag created");
        Ok(model.into())
    }
}
