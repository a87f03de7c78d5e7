//! postroll: load, validate and order Markdown blog posts
//!
//! Posts are Markdown files with a YAML front-matter block, named
//! `YYYY-M-DD-title-slug.md`. The loader turns a directory of them into an
//! ordered list of [`content::Post`] records for a static-site renderer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{LoadError, Post, PostLoader};

/// A blog source tree
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        PostLoader::new(self).load_posts()
    }

    /// Create a new post file
    pub fn new_post(&self, title: &str, layout: Option<&str>, tags: &[String]) -> Result<PathBuf> {
        commands::new::run(self, title, layout, tags)
    }
}
