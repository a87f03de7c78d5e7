//! Errors raised while loading posts

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single document (or a pair of them) was rejected
#[derive(Debug, Error)]
pub enum PostError {
    /// Delimiters missing or unbalanced, or the block is not a YAML mapping
    #[error("{}: malformed front matter: {reason}", .path.display())]
    MalformedFrontMatter { path: PathBuf, reason: String },

    #[error("{}: missing required field `{field}`", .path.display())]
    MissingRequiredField { path: PathBuf, field: &'static str },

    #[error("{}: invalid date `{value}`, expected YYYY-MM-DD", .path.display())]
    InvalidDateFormat { path: PathBuf, value: String },

    /// Two documents resolve to the same output identifier
    #[error(
        "duplicate slug `{slug}`: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PostError {
    /// The document the error is reported against
    pub fn path(&self) -> &Path {
        match self {
            PostError::MalformedFrontMatter { path, .. }
            | PostError::MissingRequiredField { path, .. }
            | PostError::InvalidDateFormat { path, .. }
            | PostError::Io { path, .. } => path.as_path(),
            PostError::DuplicateSlug { second, .. } => second.as_path(),
        }
    }
}

/// Every document that failed in one load pass
#[derive(Debug)]
pub struct LoadError {
    errors: Vec<PostError>,
}

impl LoadError {
    pub(crate) fn new(mut errors: Vec<PostError>) -> Self {
        errors.sort_by(|a, b| a.path().cmp(b.path()));
        Self { errors }
    }

    pub fn errors(&self) -> &[PostError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<PostError> {
        self.errors
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.errors.len();
        write!(f, "{} document{} failed to load", n, if n == 1 { "" } else { "s" })?;
        for err in &self.errors {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}
