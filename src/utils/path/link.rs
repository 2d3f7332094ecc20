//! Relative links between generated pages.

use super::posix;

/// Suffix appended to every generated page link.
pub const DEFAULT_LINK_EXTENSION: &str = ".html";

/// Link from the page `from_slug` to the page `to_slug`.
///
/// The last segment of `from_slug` is the page itself, so the link is
/// relative to its folder. The result always starts with `.`.
///
/// Identical folders produce `./.html`, and a target that is an ancestor of
/// the source folder produces `...html`; callers comparing slugs should
/// guard against those inputs.
///
/// # Examples
/// ```
/// use notepath::utils::path::link::create_relative_path;
/// assert_eq!(create_relative_path("a/b/c", "a/b/d"), "./d.html");
/// assert_eq!(create_relative_path("a/b/c", "a/x/y"), "../x/y.html");
/// ```
pub fn create_relative_path(from_slug: &str, to_slug: &str) -> String {
    relative_link(from_slug, to_slug, DEFAULT_LINK_EXTENSION)
}

pub(crate) fn relative_link(from_slug: &str, to_slug: &str, extension: &str) -> String {
    let from_dir = match from_slug.rsplit_once('/') {
        Some((dir, _page)) => dir,
        None => "",
    };

    let relative = posix::relative(from_dir, to_slug);

    if relative.starts_with('.') {
        format!("{relative}{extension}")
    } else {
        format!("./{relative}{extension}")
    }
}
