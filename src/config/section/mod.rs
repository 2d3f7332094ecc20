//! Configuration section definitions.
//!
//! Each module corresponds to a section in `notepath.toml`:
//!
//! | Module  | TOML Section | Purpose                          |
//! |---------|--------------|----------------------------------|
//! | `slug`  | `[slug]`     | Extensions dropped from slugs    |
//! | `link`  | `[link]`     | Suffix of generated page links   |
//! | `vault` | `[vault]`    | Directory backing the local vault|

mod link;
mod slug;
mod vault;

pub use link::LinkSectionConfig;
pub use slug::SlugSectionConfig;
pub use vault::VaultSectionConfig;
