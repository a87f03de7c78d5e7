//! List posts in render order

use anyhow::Result;
use std::io::{self, Write};

use crate::content::Post;
use crate::helpers::format_date;
use crate::Site;

/// Print every post, newest first
pub fn run(site: &Site, json: bool) -> Result<()> {
    let posts = site.load_posts()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_posts(&mut out, &posts, &site.config.date_format, json)
}

/// Write the listing as text lines or as a JSON array
pub fn write_posts<W: Write>(
    out: &mut W,
    posts: &[Post],
    date_format: &str,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, posts)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        let tags: Vec<&str> = post.tags().iter().map(String::as_str).collect();
        writeln!(
            out,
            "  {} - {} [{}] ({})",
            format_date(&post.date(), date_format),
            post.title(),
            post.slug(),
            tags.join(", ")
        )?;
    }

    Ok(())
}
