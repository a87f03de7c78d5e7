//! End-to-end loading of a posts directory

use std::fs;
use std::path::Path;

use postroll::config::SiteConfig;
use postroll::content::{load_posts, sort_posts, FrontMatter, PostError, PostLoader};
use tempfile::TempDir;

const NUMBERS: &str = r#"---
layout: post
title: "Numbers are weird"
date: 2025-08-02
tags: [blog, tutorial, C]
---

Two's complement means `-1` is all ones.
"#;

const STRUCTS: &str = r#"---
layout: post
title: "Writing memory efficient C structs"
date: 2025-07-29
tags: [blog, C]
---

```c
struct padded { char a; int b; char c; };
```
"#;

fn write(dir: &Path, name: &str, content: &str) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(dir.join(name), content).unwrap();
}

fn blog() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "2025-7-29-writing-memory-efficient-c-structs.md", STRUCTS);
    write(dir.path(), "2025-8-02-numbers-are-weird.md", NUMBERS);
    dir
}

#[test]
fn test_posts_are_newest_first() {
    let dir = blog();
    let posts = load_posts(dir.path()).unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title()).collect();
    assert_eq!(
        titles,
        vec!["Numbers are weird", "Writing memory efficient C structs"]
    );
}

#[test]
fn test_tags_parse_to_set() {
    let dir = blog();
    let posts = load_posts(dir.path()).unwrap();

    let numbers = &posts[0];
    assert_eq!(numbers.tags().len(), 3);
    for tag in ["blog", "tutorial", "C"] {
        assert!(numbers.has_tag(tag), "missing tag {tag}");
    }
}

#[test]
fn test_one_post_per_document() {
    let dir = blog();
    write(dir.path(), "nested/2024-1-05-older.md", "---\ntitle: Older\ndate: 2024-01-05\n---\n");
    write(dir.path(), "2025-8-02-a-second-post-same-day.md", "---\ntitle: Same day\ndate: 2025-08-02\n---\n");

    let posts = load_posts(dir.path()).unwrap();
    assert_eq!(posts.len(), 4);

    // Same date: slug ascending
    assert_eq!(posts[0].slug(), "2025-08-02-a-second-post-same-day");
    assert_eq!(posts[1].slug(), "2025-08-02-numbers-are-weird");
    assert_eq!(posts[3].source(), Path::new("nested/2024-1-05-older.md"));
}

#[test]
fn test_body_is_untouched() {
    let dir = blog();
    let posts = load_posts(dir.path()).unwrap();
    let structs = &posts[1];
    assert!(structs.body().starts_with("\n```c\nstruct padded"));
    assert!(structs.body().ends_with("```\n"));
}

#[test]
fn test_duplicate_slug_fails_build() {
    let dir = blog();
    // Same date and title as an existing post, only padding differs
    write(dir.path(), "2025-08-02-numbers-are-weird.md", NUMBERS);

    let err = load_posts(dir.path()).unwrap_err();
    assert_eq!(err.errors().len(), 1);
    match &err.errors()[0] {
        PostError::DuplicateSlug { slug, .. } => {
            assert_eq!(slug, "2025-08-02-numbers-are-weird")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_date_fails() {
    let dir = blog();
    write(dir.path(), "2025-8-03-undated.md", "---\ntitle: Undated\n---\nbody\n");

    let err = load_posts(dir.path()).unwrap_err();
    assert!(matches!(
        err.errors(),
        [PostError::MissingRequiredField { field: "date", .. }]
    ));
}

#[test]
fn test_unclosed_front_matter_names_the_file() {
    let dir = blog();
    write(
        dir.path(),
        "2025-8-03-unclosed.md",
        "---\ntitle: Unclosed\ndate: 2025-08-03\n\nThe block never ends.\n",
    );

    let err = load_posts(dir.path()).unwrap_err();
    match err.errors() {
        [PostError::MalformedFrontMatter { path, reason }] => {
            assert_eq!(path, &dir.path().join("2025-8-03-unclosed.md"));
            assert!(reason.contains("closing"), "reason: {reason}");
        }
        other => panic!("unexpected errors: {other:?}"),
    }
    assert!(err.to_string().contains("2025-8-03-unclosed.md"));
}

#[test]
fn test_every_offending_document_is_reported() {
    let dir = blog();
    write(dir.path(), "a.md", "no front matter at all\n");
    write(dir.path(), "b.md", "---\ntitle: B\ndate: 08/02/2025\n---\n");
    write(dir.path(), "c.md", "---\ndate: 2025-01-01\n---\n");

    let err = load_posts(dir.path()).unwrap_err();
    let errors = err.errors();
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], PostError::MalformedFrontMatter { .. }));
    assert!(matches!(errors[1], PostError::InvalidDateFormat { .. }));
    assert!(matches!(
        errors[2],
        PostError::MissingRequiredField { field: "title", .. }
    ));
    assert!(err.to_string().contains("a.md"));
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = blog();
    for i in 1..=20 {
        write(
            dir.path(),
            &format!("2024-{}-1-post-{i}.md", (i % 12) + 1),
            &format!("---\ntitle: Post {i}\ndate: 2024-{:02}-01\n---\n", (i % 12) + 1),
        );
    }

    let sequential = SiteConfig::default();
    let parallel = SiteConfig {
        parallel: true,
        ..Default::default()
    };

    let a = PostLoader::with_dir(dir.path(), &sequential).load_posts().unwrap();
    let b = PostLoader::with_dir(dir.path(), &parallel).load_posts().unwrap();
    assert_eq!(a.len(), 22);
    assert_eq!(a, b);
}

#[test]
fn test_sorting_loaded_posts_is_idempotent() {
    let dir = blog();
    let mut posts = load_posts(dir.path()).unwrap();
    let loaded = posts.clone();
    sort_posts(&mut posts);
    assert_eq!(posts, loaded);
}

#[test]
fn test_front_matter_round_trip() {
    for doc in [NUMBERS, STRUCTS] {
        let (fm, body) = FrontMatter::parse(doc).unwrap();
        let yaml = fm.to_yaml().unwrap();
        let reparsed: FrontMatter = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reparsed, fm);

        let rendered = fm.render(body).unwrap();
        let (again, again_body) = FrontMatter::parse(&rendered).unwrap();
        assert_eq!(again, fm);
        assert_eq!(again_body, body);
    }
}

#[test]
fn test_site_reads_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "_config.yml", "posts_dir: content\ndefault_layout: article\n");
    write(dir.path(), "content/2025-8-02-numbers-are-weird.md", "---\ntitle: N\ndate: 2025-08-02\n---\n");

    let site = postroll::Site::new(dir.path()).unwrap();
    let posts = site.load_posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].layout(), "article");
}
