//! Domain entities - the core business objects.

mod filter;
mod input;
mod post;
mod tag;

pub use filter::{DateOrder, PostFilter};
pub use input::{PostInput, parse_publication_date};
pub use post::{NewPost, Post};
pub use tag::Tag;
