use notepath::{
    MemoryVault, VaultAdapter, create_relative_path, delete_files_in_directory, ensure_directory,
    simplify_slug, sluggify, slugify_file_path, strip_slashes,
};

mod slug_integration_tests {
    use super::*;

    #[test]
    fn test_publish_paths_to_links() {
        let from = simplify_slug(&slugify_file_path("/notes/Daily Log.md", false));
        let to = simplify_slug(&slugify_file_path("notes/Q&A/Ideas 100%.md", false));

        assert_eq!(from, "notes/Daily-Log");
        assert_eq!(to, "notes/Q-and-A/Ideas-100-percent");
        assert_eq!(
            create_relative_path(&from, &to),
            "./Q-and-A/Ideas-100-percent.html"
        );
        assert_eq!(
            create_relative_path(&to, &from),
            "../Daily-Log.html"
        );
    }

    #[test]
    fn test_home_page_collapses_to_root() {
        let home = simplify_slug(&slugify_file_path("index.md", false));
        assert_eq!(home, "/");
        assert_eq!(simplify_slug(&slugify_file_path("notes/index.md", false)), "notes/");
    }

    #[test]
    fn test_assets_keep_their_extension() {
        assert_eq!(slugify_file_path("img/photo.PNG", false), "img/photo.PNG");
        assert_eq!(slugify_file_path("files/archive.tar.gz", false), "files/archive.tar.gz");
        assert_eq!(
            create_relative_path("notes/page", "img/photo.PNG"),
            "../img/photo.PNG.html"
        );
    }

    #[test]
    fn test_string_helpers_are_total() {
        for input in ["", "/", "//", "?", "#", "&", "%", " ", "index", ".", ".."] {
            let slug = sluggify(input);
            assert!(!slug.contains(char::is_whitespace), "{input:?} -> {slug:?}");
            assert!(!slug.contains(['?', '#']), "{input:?} -> {slug:?}");

            for exclude in [false, true] {
                let path = slugify_file_path(input, exclude);
                assert!(!path.starts_with('/') && !path.ends_with('/'), "{input:?} -> {path:?}");
                assert!(!path.contains(['?', '#', ' ']), "{input:?} -> {path:?}");
            }

            let stripped = strip_slashes(input, false);
            assert!(input.len() - stripped.len() <= 2);
            assert!(input.contains(stripped));
            assert!(!simplify_slug(input).is_empty());
            assert!(create_relative_path(input, input).ends_with(".html"));
        }
    }
}

mod vault_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_prepare_output_then_clean() {
        let vault = MemoryVault::new().with_folder("site");

        for page in ["site/notes/a.html", "site/notes/b.html"] {
            ensure_directory(&vault, page).await.unwrap();
        }
        assert!(vault.exists("site/notes").await.unwrap());

        let vault = vault
            .with_file("site/notes/a.html", "a")
            .with_file("site/notes/b.html", "b");
        let deleted = delete_files_in_directory(&vault, "site/notes").await.unwrap();
        assert_eq!(deleted, 2);
        assert!(vault.list("site/notes").await.unwrap().files.is_empty());
    }
}
