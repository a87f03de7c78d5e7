//! Post filename convention: `YYYY-M-DD-title-slug.md`

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref DATED_STEM: Regex =
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})-(.+)$").expect("valid filename regex");
}

/// What a post's filename says about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilename {
    /// Date prefix, when the stem carries a valid one
    pub date: Option<NaiveDate>,
    /// Unique identifier: `YYYY-MM-DD-title` or the slugified stem
    pub slug: String,
}

impl PostFilename {
    /// Parse a path's file stem.
    ///
    /// Month and day may be written with one or two digits; the slug always
    /// uses the zero-padded form so `2025-8-02-x.md` and `2025-08-02-x.md`
    /// resolve to the same identifier.
    pub fn parse(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let stem: &str = &stem;

        if let Some((date, title)) = split_dated_stem(stem) {
            let title = slug::slugify(title);
            return Self {
                date: Some(date),
                slug: format!("{}-{}", date.format("%Y-%m-%d"), title),
            };
        }

        Self {
            date: None,
            slug: slug::slugify(stem),
        }
    }
}

fn split_dated_stem(stem: &str) -> Option<(NaiveDate, &str)> {
    let caps = DATED_STEM.captures(stem)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let title = caps.get(4)?.as_str();
    Some((date, title))
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Dotfiles and editor swap files are never posts
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
