//! Post loader - reads, validates and orders posts from a directory

use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::filename::{is_hidden, is_markdown_file, PostFilename};
use super::frontmatter::{parse_date, FrontMatter};
use super::{sort_posts, LoadError, Post, PostError};
use crate::config::SiteConfig;
use crate::Site;

/// Loads posts from a directory
pub struct PostLoader<'a> {
    posts_dir: &'a Path,
    config: &'a SiteConfig,
}

impl<'a> PostLoader<'a> {
    /// Create a loader for the site's posts directory
    pub fn new(site: &'a Site) -> Self {
        Self::with_dir(&site.posts_dir, &site.config)
    }

    /// Create a loader for an arbitrary directory
    pub fn with_dir(posts_dir: &'a Path, config: &'a SiteConfig) -> Self {
        Self { posts_dir, config }
    }

    /// Load every post, newest first.
    ///
    /// Either all documents load or the returned error lists each one
    /// that did not.
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        if !self.posts_dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let (paths, mut errors) = self.discover();

        let results: Vec<Result<Post, PostError>> = if self.config.parallel {
            paths.par_iter().map(|path| self.load_post(path)).collect()
        } else {
            paths.iter().map(|path| self.load_post(path)).collect()
        };

        let mut posts = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::debug!("Rejected: {}", e);
                    errors.push(e);
                }
            }
        }

        errors.extend(self.duplicate_slugs(&posts));

        if !errors.is_empty() {
            return Err(LoadError::new(errors));
        }

        sort_posts(&mut posts);
        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);

        Ok(posts)
    }

    /// Collect candidate files in a stable order
    fn discover(&self) -> (Vec<PathBuf>, Vec<PostError>) {
        let mut paths = Vec::new();
        let mut errors = Vec::new();

        for entry in WalkDir::new(self.posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file() && is_markdown_file(path) {
                        paths.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.posts_dir.to_path_buf());
                    let message = e.to_string();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
                    errors.push(PostError::Io { path, source });
                }
            }
        }

        (paths, errors)
    }

    /// Load and validate a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post, PostError> {
        tracing::debug!("Loading post {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| PostError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) =
            FrontMatter::parse(&content).map_err(|e| PostError::MalformedFrontMatter {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let title = fm
            .title()
            .ok_or_else(|| PostError::MissingRequiredField {
                path: path.to_path_buf(),
                field: "title",
            })?
            .to_string();

        let raw_date = fm
            .date
            .as_deref()
            .ok_or_else(|| PostError::MissingRequiredField {
                path: path.to_path_buf(),
                field: "date",
            })?;
        let date = parse_date(raw_date).ok_or_else(|| PostError::InvalidDateFormat {
            path: path.to_path_buf(),
            value: raw_date.to_string(),
        })?;

        let name = PostFilename::parse(path);
        if let Some(file_date) = name.date {
            if file_date != date {
                tracing::warn!(
                    "{:?}: filename date {} differs from front-matter date {}",
                    path,
                    file_date,
                    date
                );
            }
        }

        let layout = fm
            .layout
            .unwrap_or_else(|| self.config.default_layout.clone());

        let source = path
            .strip_prefix(self.posts_dir)
            .unwrap_or(path)
            .to_path_buf();

        Ok(Post::new(name.slug, title, date, layout, body.to_string(), source)
            .with_tags(fm.tags)
            .with_extra(fm.extra))
    }

    /// Report every post whose slug was already taken by an earlier one
    fn duplicate_slugs(&self, posts: &[Post]) -> Vec<PostError> {
        let mut seen: HashMap<&str, &Path> = HashMap::new();
        let mut errors = Vec::new();

        for post in posts {
            if let Some(first) = seen.get(post.slug()) {
                errors.push(PostError::DuplicateSlug {
                    slug: post.slug().to_string(),
                    first: self.posts_dir.join(first),
                    second: self.posts_dir.join(post.source()),
                });
            } else {
                seen.insert(post.slug(), post.source());
            }
        }

        errors
    }
}

/// Load posts from `posts_dir` with the default configuration
pub fn load_posts<P: AsRef<Path>>(posts_dir: P) -> Result<Vec<Post>, LoadError> {
    let config = SiteConfig::default();
    PostLoader::with_dir(posts_dir.as_ref(), &config).load_posts()
}
