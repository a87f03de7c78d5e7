//! Tag usage summary

use anyhow::Result;
use std::collections::HashMap;

use crate::content::Post;
use crate::Site;

/// Print each tag with its post count
pub fn run(site: &Site) -> Result<()> {
    let posts = site.load_posts()?;
    let tags = tag_counts(&posts);
    println!("Tags ({}):", tags.len());
    for (tag, count) in tags {
        println!("  {} ({})", tag, count);
    }
    Ok(())
}

/// Tags by post count, most used first; ties ordered by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in post.tags() {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
