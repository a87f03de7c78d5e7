//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::Site;

/// Create a post dated today
pub fn run(site: &Site, title: &str, layout: Option<&str>, tags: &[String]) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    create_post(site, title, layout, tags, today)
}

/// Write a post scaffold named after `new_post_name`
pub fn create_post(
    site: &Site,
    title: &str,
    layout: Option<&str>,
    tags: &[String],
    date: NaiveDate,
) -> Result<PathBuf> {
    if title.trim().is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    fs::create_dir_all(&site.posts_dir)?;

    let slug = slug::slugify(title);
    let filename = site
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &date.format("%Y").to_string())
        .replace(":month", &date.format("%m").to_string())
        .replace(":day", &date.format("%d").to_string())
        .replace(":i_month", &date.format("%-m").to_string())
        .replace(":i_day", &date.format("%-d").to_string());
    let file_path = site.posts_dir.join(filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let fm = FrontMatter {
        layout: Some(layout.unwrap_or(&site.config.default_layout).to_string()),
        title: Some(title.to_string()),
        date: Some(date.format("%Y-%m-%d").to_string()),
        tags: tags.to_vec(),
        ..Default::default()
    };
    fs::write(&file_path, fm.render("\n")?)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
