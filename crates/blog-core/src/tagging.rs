//! Find-or-create tags by name and link them to a post.

use crate::domain::Tag;
use crate::error::RepoError;
use crate::ports::{PostRepository, TagRepository};

/// Outcome of [`attach_tags`].
#[derive(Debug, Default)]
pub struct TagAttachReport {
    /// Tags newly linked to the post.
    pub attached: Vec<Tag>,
    /// Tags that were already linked.
    pub unchanged: Vec<Tag>,
    /// Names that could not be processed.
    pub failed: Vec<(String, RepoError)>,
}

impl TagAttachReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Link every named tag to the post, creating missing tags.
///
/// Each name is processed on its own: a failure is recorded in the report and
/// the remaining names are still attempted. Earlier links are kept.
pub async fn attach_tags(
    posts: &dyn PostRepository,
    tags: &dyn TagRepository,
    post_id: i32,
    names: &[String],
) -> TagAttachReport {
    let mut report = TagAttachReport::default();

    for name in names {
        let outcome = async {
            let tag = find_or_create(tags, name).await?;
            let linked = posts.attach_tag(post_id, tag.id).await?;
            Ok::<_, RepoError>((tag, linked))
        }
        .await;

        match outcome {
            Ok((tag, true)) => report.attached.push(tag),
            Ok((tag, false)) => report.unchanged.push(tag),
            Err(err) => report.failed.push((name.clone(), err)),
        }
    }

    report
}

/// Look a tag up by exact name, creating it when absent.
pub async fn find_or_create(tags: &dyn TagRepository, name: &str) -> Result<Tag, RepoError> {
    if let Some(tag) = tags.find_by_name(name).await? {
        return Ok(tag);
    }

    match tags.create(name).await {
        Ok(tag) => Ok(tag),
        // Another request created it in between.
        Err(RepoError::Constraint(_)) => tags.find_by_name(name).await?.ok_or(RepoError::NotFound),
        Err(err) => Err(err),
    }
}
