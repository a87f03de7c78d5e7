//! Post model

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A blog post.
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Unique identifier derived from the filename
    slug: String,

    /// Post title
    title: String,

    /// Publication date
    date: NaiveDate,

    /// Post tags
    tags: IndexSet<String>,

    /// Layout template to use
    layout: String,

    /// Raw markdown content, exactly as written
    body: String,

    /// Source file path (relative to the posts directory)
    source: PathBuf,

    /// Custom front-matter fields
    extra: BTreeMap<String, serde_yaml::Value>,
}

impl Post {
    pub(crate) fn new(
        slug: String,
        title: String,
        date: NaiveDate,
        layout: String,
        body: String,
        source: PathBuf,
    ) -> Self {
        Self {
            slug,
            title,
            date,
            tags: IndexSet::new(),
            layout,
            body,
            source,
            extra: BTreeMap::new(),
        }
    }

    pub(crate) fn with_tags<I: IntoIterator<Item = String>>(mut self, tags: I) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub(crate) fn with_extra(mut self, extra: BTreeMap<String, serde_yaml::Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Tags in the order the author listed them, without duplicates
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn extra(&self) -> &BTreeMap<String, serde_yaml::Value> {
        &self.extra
    }
}

/// Sort by date descending (newest first), then slug ascending
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}
