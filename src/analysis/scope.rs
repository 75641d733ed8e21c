//! Scope inference from changed file paths.

use std::collections::BTreeSet;

/// Maps a bare file extension to a scope token.
fn scope_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "js" | "ts" | "jsx" | "tsx" => Some("frontend"),
        "py" | "java" | "go" | "rs" => Some("backend"),
        "css" | "scss" | "less" => Some("styles"),
        _ => None,
    }
}

/// Infers an optional scope token from the changed file paths.
///
/// A path with a separator contributes its first segment; a bare file name
/// with a recognized extension contributes the extension's scope token.
/// Exactly one distinct candidate becomes the scope; zero or several resolve
/// to the empty string rather than an arbitrary pick.
pub fn infer_scope(files: &[String]) -> String {
    let mut candidates = BTreeSet::new();

    for file in files {
        if let Some((first_segment, _)) = file.split_once('/') {
            candidates.insert(first_segment.to_string());
        } else if let Some((_, ext)) = file.rsplit_once('.') {
            if let Some(scope) = scope_for_extension(ext) {
                candidates.insert(scope.to_string());
            }
        }
    }

    if candidates.len() == 1 {
        candidates.into_iter().next().unwrap_or_default()
    } else {
        String::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_directory_scope() {
        assert_eq!(
            infer_scope(&files(&["backend/a.py", "backend/b.py"])),
            "backend"
        );
    }

    #[test]
    fn ambiguous_directories_resolve_to_empty() {
        assert_eq!(infer_scope(&files(&["frontend/a.ts", "backend/b.py"])), "");
    }

    #[test]
    fn no_files_resolve_to_empty() {
        assert_eq!(infer_scope(&[]), "");
    }

    #[test]
    fn extension_maps_to_frontend() {
        assert_eq!(infer_scope(&files(&["app.tsx"])), "frontend");
    }

    #[test]
    fn extension_maps_to_backend() {
        assert_eq!(infer_scope(&files(&["server.go"])), "backend");
    }

    #[test]
    fn extension_maps_to_styles() {
        assert_eq!(infer_scope(&files(&["theme.scss"])), "styles");
    }

    #[test]
    fn unmapped_extension_contributes_nothing() {
        // Only main.c contributes no candidate; lib.rs decides alone.
        assert_eq!(infer_scope(&files(&["main.c", "lib.rs"])), "backend");
    }

    #[test]
    fn extensionless_bare_name_contributes_nothing() {
        assert_eq!(infer_scope(&files(&["Makefile"])), "");
    }

    #[test]
    fn same_extension_scope_from_many_files_is_one_candidate() {
        assert_eq!(infer_scope(&files(&["a.ts", "b.jsx", "c.js"])), "frontend");
    }

    #[test]
    fn directory_and_matching_extension_scope_still_ambiguous() {
        // "api" (directory) and "backend" (extension) are distinct candidates.
        assert_eq!(infer_scope(&files(&["api/handler.py", "tool.py"])), "");
    }

    #[test]
    fn nested_path_uses_first_segment_only() {
        assert_eq!(infer_scope(&files(&["core/deep/nested/file.c"])), "core");
    }
}
