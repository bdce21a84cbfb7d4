use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists candidate shader sources below a root directory.
pub trait FileLister {
    /// Every file under `root` whose name ends with `.{extension}`, in walk order.
    fn list(&self, root: &Path, extension: &str) -> Vec<PathBuf>;
}

/// Recursive filesystem walk. Symlinks are not followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkDirLister;

impl FileLister for WalkDirLister {
    fn list(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        let suffix = format!(".{}", extension);
        let mut files = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // keep walking the rest of the tree
                    log::warn!("Failed to read an entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            // follows symlinks, so linked files count and linked directories don't
            if !entry.path().is_file() {
                continue;
            }

            if entry.file_name().to_string_lossy().ends_with(&suffix) {
                files.push(entry.into_path());
            }
        }

        log::debug!(
            "Found {} *{} file(s) under {}",
            files.len(),
            suffix,
            root.display()
        );
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#version 450\nvoid main() {}\n").unwrap();
    }

    #[test]
    fn test_lists_matching_files_recursively() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a_vert.glsl");
        touch(dir.path(), "nested/b_frag.glsl");
        touch(dir.path(), "nested/deeper/c_comp.glsl");
        touch(dir.path(), "nested/d_other.glsl");

        let mut files = WalkDirLister.list(dir.path(), "glsl");
        files.sort();

        let mut expected = vec![
            dir.path().join("a_vert.glsl"),
            dir.path().join("nested/b_frag.glsl"),
            dir.path().join("nested/deeper/c_comp.glsl"),
            dir.path().join("nested/d_other.glsl"),
        ];
        expected.sort();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a_vert.glsl");
        touch(dir.path(), "a_vert.spv");
        touch(dir.path(), "notes.glsl.txt");
        touch(dir.path(), "shader_build.py");
        touch(dir.path(), "glsl");

        let files = WalkDirLister.list(dir.path(), "glsl");
        assert_eq!(files, vec![dir.path().join("a_vert.glsl")]);
    }

    #[test]
    fn test_directories_are_not_listed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("looks_vert.glsl")).unwrap();
        touch(dir.path(), "looks_vert.glsl/inner_frag.glsl");

        let files = WalkDirLister.list(dir.path(), "glsl");
        assert_eq!(files, vec![dir.path().join("looks_vert.glsl/inner_frag.glsl")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_listed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link_vert.glsl"))
            .unwrap();

        let files = WalkDirLister.list(dir.path(), "glsl");
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_listed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real/a_frag.src");
        std::os::unix::fs::symlink(
            dir.path().join("real/a_frag.src"),
            dir.path().join("link_frag.glsl"),
        )
        .unwrap();

        let files = WalkDirLister.list(dir.path(), "glsl");
        assert_eq!(files, vec![dir.path().join("link_frag.glsl")]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let files = WalkDirLister.list(&dir.path().join("missing"), "glsl");
        assert!(files.is_empty());
    }
}
