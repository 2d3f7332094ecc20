//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`slug`]: URL slugification (`sluggify`, `slugify_file_path`, `simplify_slug`)
//! - [`link`]: links between generated pages (`create_relative_path`)
//! - [`posix`]: `/`-separated path primitives (`relative`, `dirname`)

pub mod link;
pub mod posix;
pub mod slug;

pub use link::create_relative_path;
pub use slug::{SlugRules, simplify_slug, sluggify, slugify_file_path, strip_slashes};
