//! Validate every post without producing output

use anyhow::Result;

use crate::Site;

/// Load all posts, reporting each offending document
pub fn run(site: &Site) -> Result<usize> {
    match site.load_posts() {
        Ok(posts) => {
            println!("{} posts OK", posts.len());
            Ok(posts.len())
        }
        Err(e) => {
            let failed = e.errors().len();
            for err in e.errors() {
                tracing::error!("{}", err);
            }
            anyhow::bail!(
                "{} document{} failed validation",
                failed,
                if failed == 1 { "" } else { "s" }
            )
        }
    }
}
