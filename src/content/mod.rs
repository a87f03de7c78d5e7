//! Content module - front matter, post records and the post loader

mod error;
mod filename;
pub mod frontmatter;
pub mod loader;
mod post;

pub use error::{LoadError, PostError};
pub use filename::PostFilename;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::{load_posts, PostLoader};
pub use post::{sort_posts, Post};
