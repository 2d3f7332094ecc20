//! POSIX path primitives for `/`-separated vault paths.
//!
//! These never touch the filesystem or the process working directory. A
//! leading `/` is ignored, so `a/b` and `/a/b` name the same location, and
//! `..` segments that climb out of a path are kept rather than dropped.

/// A path reduced to its normal form: `up` leading `..` segments followed by
/// plain segments.
#[derive(Debug, PartialEq, Eq)]
struct Normalized<'a> {
    up: usize,
    segments: Vec<&'a str>,
}

/// Normalize a path the way `path.posix.normalize` does.
///
/// Empty and `.` segments are dropped. `..` pops the previous segment, or is
/// counted in `up` when there is nothing left to pop.
fn normalize(path: &str) -> Normalized<'_> {
    let mut up = 0;
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    up += 1;
                }
            }
            segment => segments.push(segment),
        }
    }
    Normalized { up, segments }
}

/// Relative path from directory `from` to path `to`.
///
/// Shared leading segments are eliminated, one `..` is emitted for every
/// remaining segment of `from`, then the remaining segments of `to` follow.
/// Returns an empty string when both resolve to the same location.
///
/// When `to` climbs above the starting point of `from` the extra `..` are
/// carried into the result. When `from` climbs higher than `to`, the answer
/// would depend on the names of the working directory's ancestors; both
/// paths are then taken as if run from the filesystem root, where `..`
/// cannot climb.
///
/// # Examples
/// ```
/// use notepath::utils::path::posix::relative;
/// assert_eq!(relative("a/b", "a/b/d"), "d");
/// assert_eq!(relative("a/b", "a/x/y"), "../x/y");
/// assert_eq!(relative("a", "../../x"), "../../../x");
/// assert_eq!(relative("a/b", "/a/b/"), "");
/// ```
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);

    let climb = to.up.saturating_sub(from.up);
    let shared = if climb == 0 {
        from.segments
            .iter()
            .zip(&to.segments)
            .take_while(|(a, b)| a == b)
            .count()
    } else {
        0
    };

    std::iter::repeat_n("..", from.segments.len() - shared + climb)
        .chain(to.segments[shared..].iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory portion of a path.
///
/// Trailing separators are ignored. A path without a separator yields `.`,
/// a path whose only separator is the leading one yields `/`.
///
/// # Examples
/// ```
/// use notepath::utils::path::posix::dirname;
/// assert_eq!(dirname("a/b/c.html"), "a/b");
/// assert_eq!(dirname("c.html"), ".");
/// assert_eq!(dirname("/c.html"), "/");
/// ```
pub fn dirname(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.is_empty() {
        return ".";
    }
    let has_root = bytes[0] == b'/';

    // Scan backwards for the first separator that follows a non-separator.
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }

    match end {
        None if has_root => "/",
        None => ".",
        Some(1) if has_root => "//",
        Some(end) => &path[..end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_empty_and_dot_segments() {
        assert_eq!(normalize("a//./b/").segments, vec!["a", "b"]);
        assert_eq!(normalize("").segments, Vec::<&str>::new());
        assert_eq!(normalize("/").segments, Vec::<&str>::new());
    }

    #[test]
    fn test_normalize_keeps_unmatched_parents() {
        assert_eq!(
            normalize("a/../b"),
            Normalized { up: 0, segments: vec!["b"] }
        );
        assert_eq!(
            normalize("../../a"),
            Normalized { up: 2, segments: vec!["a"] }
        );
        assert_eq!(
            normalize("a/../../b/.."),
            Normalized { up: 1, segments: vec![] }
        );
    }

    #[test]
    fn test_relative_sibling_and_cousin() {
        assert_eq!(relative("a/b", "a/b/d"), "d");
        assert_eq!(relative("a/b", "a/x/y"), "../x/y");
        assert_eq!(relative("a/b/c", "x"), "../../../x");
    }

    #[test]
    fn test_relative_from_root() {
        assert_eq!(relative("", "d"), "d");
        assert_eq!(relative("/", "a/b"), "a/b");
    }

    #[test]
    fn test_relative_same_location_is_empty() {
        assert_eq!(relative("a/b", "a/b"), "");
        assert_eq!(relative("", "/"), "");
        assert_eq!(relative("a/./b", "a/b/"), "");
    }

    #[test]
    fn test_relative_to_ancestor() {
        assert_eq!(relative("a/b", "a"), "..");
        assert_eq!(relative("a/b", ""), "../..");
    }

    #[test]
    fn test_relative_target_above_start() {
        assert_eq!(relative("", "../x"), "../x");
        assert_eq!(relative("a", "../../x"), "../../../x");
        assert_eq!(relative("../a", "../../x"), "../../x");
        assert_eq!(relative("", ".."), "..");
    }

    #[test]
    fn test_relative_same_climb_compares_segments() {
        assert_eq!(relative("../a/b", "../a/c"), "../c");
        assert_eq!(relative("../a", "../a"), "");
    }

    #[test]
    fn test_relative_source_above_target_is_rooted() {
        assert_eq!(relative("../a", "b"), "../b");
        assert_eq!(relative("..", "x"), "x");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("a/b/c.html"), "a/b");
        assert_eq!(dirname("a/b/"), "a");
        assert_eq!(dirname("c.html"), ".");
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("/c.html"), "/");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("//a"), "//");
        assert_eq!(dirname("a//b"), "a/");
    }
}
