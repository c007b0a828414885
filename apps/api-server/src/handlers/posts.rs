//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use blog_core::domain::{DateOrder, NewPost, Post, PostFilter, PostInput};
use blog_core::error::DomainError;
use blog_core::ports::{BaseRepository, PostRepository};
use blog_core::tagging::attach_tags;
use blog_shared::ApiResponse;
use blog_shared::dto::{CreatedResult, PostListResult, PostResponse, PostResult};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Segments of the listing route; trailing ones may be absent.
#[derive(Debug, Deserialize)]
pub struct ListPath {
    published_only: Option<String>,
    date_order: Option<String>,
    tag: Option<String>,
}

/// GET /posts/all/{published_only}/{date_order}/{tag}
///
/// Every segment is optional. `published_only` and `date_order` are integer
/// flags: a set `date_order` sorts oldest first, the default is newest first.
/// An empty or missing tag applies no tag constraint.
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<ListPath>,
) -> AppResult<HttpResponse> {
    let filter = list_filter(path.into_inner());
    let posts = state.posts.find_filtered(&filter).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostListResult {
        posts: posts.iter().map(format_response).collect(),
    })))
}

/// GET /posts/one/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResult {
        posts: format_response(&post),
    })))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    let new_post = NewPost::from_input(&input, Utc::now())?;
    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = post.id, "Post created");

    let tag_names = input.tag_names();
    if !tag_names.is_empty() {
        let report =
            attach_tags(state.posts.as_ref(), state.tags.as_ref(), post.id, &tag_names).await;
        for (name, err) in &report.failed {
            tracing::warn!(post_id = post.id, tag = %name, error = %err, "Failed to attach tag");
        }
        tracing::debug!(
            post_id = post.id,
            attached = report.attached.len(),
            unchanged = report.unchanged.len(),
            "Tags attached"
        );
    }

    match state.notifier.send_post_created_notice().await {
        Ok(true) => tracing::debug!(post_id = post.id, "Post-created notice sent"),
        Ok(false) => tracing::debug!("Post-created notice skipped (no admin address)"),
        Err(e) => tracing::warn!(post_id = post.id, error = %e, "Post-created notice failed"),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CreatedResult { id: post.id })))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;

    post.apply_update(&body)?;
    let post = state.posts.save(post).await?;
    tracing::info!(post_id = post.id, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResult {
        posts: format_response(&post),
    })))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    state.posts.delete(post.id).await?;
    tracing::info!(post_id = post.id, "Post deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post was deleted")))
}

async fn find_post(state: &AppState, id: i32) -> AppResult<Post> {
    let post = state.posts.find_by_id(id).await?;
    Ok(post.ok_or(DomainError::NotFound {
        entity_type: "Post",
        id,
    })?)
}

/// Public projection: no id, no tags.
fn format_response(post: &Post) -> PostResponse {
    PostResponse {
        title: post.title.clone(),
        body: post.body.clone(),
        publication_date: post.publication_date,
        published: post.published,
    }
}

// `Path` extraction percent-decodes every segment, so `c%2B%2B` reaches the
// filter as `c++`.
fn list_filter(path: ListPath) -> PostFilter {
    let published_only = path.published_only.as_deref().is_some_and(flag_set);
    let date_order = if path.date_order.as_deref().is_some_and(flag_set) {
        DateOrder::Asc
    } else {
        DateOrder::Desc
    };

    PostFilter::new(path.tag, published_only, date_order)
}

fn flag_set(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.parse::<i64>().is_ok_and(|n| n != 0)
}
