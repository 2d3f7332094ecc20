//! URL slugification for vault paths.
//!
//! - `sluggify`: per-segment character replacement
//! - `slugify_file_path`: slug of a file path, keeping asset extensions
//! - `strip_slashes` / `simplify_slug`: comparison-stable slugs
//! - [`SlugRules`]: the same operations with configurable extension lists

use regex::Regex;
use std::sync::LazyLock;

use super::link;

/// Extensions removed from page slugs (`note.md` → `note`).
pub const DEFAULT_DROP_EXTENSIONS: [&str; 2] = [".md", ".html"];

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]").unwrap());
static RE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[A-Za-z0-9]+$").unwrap());

/// Make every `/`-delimited segment URL-safe.
///
/// Whitespace becomes `-`, `&` becomes `-and-`, `%` becomes `-percent`,
/// `?` and `#` are removed. A single trailing `/` is dropped.
///
/// # Examples
/// ```
/// use notepath::utils::path::slug::sluggify;
/// assert_eq!(sluggify("a b/c&d"), "a-b/c-and-d");
/// assert_eq!(sluggify("50% off?/"), "50-percent-off");
/// ```
pub fn sluggify(path: &str) -> String {
    let mut slug = path
        .split('/')
        .map(sluggify_segment)
        .collect::<Vec<_>>()
        .join("/");

    if slug.ends_with('/') {
        slug.pop();
    }
    slug
}

fn sluggify_segment(segment: &str) -> String {
    RE_WHITESPACE
        .replace_all(segment, "-")
        .replace('&', "-and-")
        .replace('%', "-percent")
        .replace(['?', '#'], "")
}

/// Split a trimmed path into `(stem, extension)`.
///
/// Only the final dot-suffix made of ASCII letters and digits counts as an
/// extension, so `archive.tar.gz` splits into `archive.tar` and `.gz`.
fn split_extension(path: &str) -> (&str, &str) {
    match RE_EXTENSION.find(path) {
        Some(ext) => (&path[..ext.start()], ext.as_str()),
        None => (path, ""),
    }
}

/// Slugify a file path, dropping `.md`/`.html` extensions.
///
/// Leading and trailing `/` runs are removed first. Other extensions are
/// kept verbatim unless `exclude_extension` is set.
///
/// # Examples
/// ```
/// use notepath::utils::path::slug::slugify_file_path;
/// assert_eq!(slugify_file_path("/notes/My Note.md", false), "notes/My-Note");
/// assert_eq!(slugify_file_path("img/photo.PNG", false), "img/photo.PNG");
/// assert_eq!(slugify_file_path("img/photo.PNG", true), "img/photo");
/// ```
pub fn slugify_file_path(path: &str, exclude_extension: bool) -> String {
    slugify_file_path_with(path, exclude_extension, &DEFAULT_DROP_EXTENSIONS)
}

fn slugify_file_path_with<S: AsRef<str>>(
    path: &str,
    exclude_extension: bool,
    drop_extensions: &[S],
) -> String {
    let trimmed = path.trim_matches('/');
    let (stem, ext) = split_extension(trimmed);

    let keep_extension = !exclude_extension
        && !ext.is_empty()
        && !drop_extensions.iter().any(|drop| drop.as_ref() == ext);

    let mut slug = sluggify(stem);
    if keep_extension {
        slug.push_str(ext);
    }
    slug
}

/// Remove at most one leading and (unless `only_strip_prefix`) one trailing `/`.
///
/// # Examples
/// ```
/// use notepath::utils::path::slug::strip_slashes;
/// assert_eq!(strip_slashes("/a/b/", false), "a/b");
/// assert_eq!(strip_slashes("/a/b/", true), "a/b/");
/// assert_eq!(strip_slashes("//a//", false), "/a/");
/// ```
pub fn strip_slashes(s: &str, only_strip_prefix: bool) -> &str {
    let s = s.strip_prefix('/').unwrap_or(s);
    if only_strip_prefix {
        s
    } else {
        s.strip_suffix('/').unwrap_or(s)
    }
}

/// Collapse `index` pages onto their folder and strip one leading slash.
///
/// The separator in front of a removed `index` is kept and trailing slashes
/// are left alone. An empty result is the root slug `/`.
///
/// # Examples
/// ```
/// use notepath::utils::path::slug::simplify_slug;
/// assert_eq!(simplify_slug("index"), "/");
/// assert_eq!(simplify_slug("notes/index"), "notes/");
/// assert_eq!(simplify_slug("/notes/page"), "notes/page");
/// ```
pub fn simplify_slug(path: &str) -> String {
    const INDEX: &str = "index";

    let trimmed = if path == INDEX || path.ends_with("/index") {
        &path[..path.len() - INDEX.len()]
    } else {
        path
    };

    match strip_slashes(trimmed, true) {
        "" => "/".to_owned(),
        slug => slug.to_owned(),
    }
}

// ============================================================================
// SlugRules
// ============================================================================

/// Slug and link operations with configurable extensions.
///
/// `SlugRules::default()` behaves exactly like the free functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRules {
    /// Extensions dropped from page slugs (exact, case-sensitive match).
    pub drop_extensions: Vec<String>,
    /// Suffix appended to relative links.
    pub link_extension: String,
}

impl Default for SlugRules {
    fn default() -> Self {
        Self {
            drop_extensions: DEFAULT_DROP_EXTENSIONS.map(String::from).to_vec(),
            link_extension: link::DEFAULT_LINK_EXTENSION.to_owned(),
        }
    }
}

impl SlugRules {
    /// [`slugify_file_path`] with the configured drop list.
    pub fn slugify_file_path(&self, path: &str, exclude_extension: bool) -> String {
        slugify_file_path_with(path, exclude_extension, &self.drop_extensions)
    }

    /// [`link::create_relative_path`] with the configured link suffix.
    pub fn relative_link(&self, from_slug: &str, to_slug: &str) -> String {
        link::relative_link(from_slug, to_slug, &self.link_extension)
    }
}
