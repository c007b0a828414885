//! Listing criteria for posts.

/// Sort direction on `publication_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

/// Criteria for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Exact tag name; `None` or empty means no tag constraint.
    pub tag: Option<String>,
    pub published_only: bool,
    pub date_order: DateOrder,
}

impl PostFilter {
    pub fn new(tag: Option<String>, published_only: bool, date_order: DateOrder) -> Self {
        Self {
            tag,
            published_only,
            date_order,
        }
    }

    /// The tag constraint, if one applies.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_no_constraint() {
        let filter = PostFilter::new(Some(String::new()), false, DateOrder::Asc);
        assert_eq!(filter.tag_name(), None);

        let filter = PostFilter::new(Some("rust".into()), false, DateOrder::Asc);
        assert_eq!(filter.tag_name(), Some("rust"));
    }

    #[test]
    fn default_is_newest_first_without_constraints() {
        let filter = PostFilter::default();
        assert_eq!(filter.date_order, DateOrder::Desc);
        assert!(!filter.published_only);
        assert_eq!(filter.tag_name(), None);
    }
}
