use crate::structs::{MediaFile, MediaKind};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Classifies a path by extension, case-insensitively.
/// `None` means the file is not a supported media kind and is ignored.
pub fn classify_extension(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "mov" | "mkv" | "avi" | "m4v" => Some(MediaKind::Video),
        "jpg" | "jpeg" | "png" | "heic" => Some(MediaKind::Photo),
        _ => None,
    }
}

/// Lists the supported media files directly inside `dir` (non-recursive),
/// in file-name order. Traversal I/O errors are propagated.
pub fn list_media_files(dir: &Path) -> Result<Vec<MediaFile>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    return None;
                }
                classify_extension(entry.path()).map(|kind| {
                    Ok(MediaFile {
                        path: entry.path().to_path_buf(),
                        kind,
                    })
                })
            }
            Err(e) => Some(Err(e)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify_extension(Path::new("a.MP4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            classify_extension(Path::new("b.JPeG")),
            Some(MediaKind::Photo)
        );
        assert_eq!(classify_extension(Path::new("c.txt")), None);
        assert_eq!(classify_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_listing_is_non_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.mp4")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested/deep.mp4")).unwrap();

        let files = list_media_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.mp4"]);
        assert_eq!(files[0].kind, MediaKind::Photo);
        assert_eq!(files[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_hidden_files_are_ignored() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join(".hidden.mp4")).unwrap();
        File::create(dir.path().join("visible.mp4")).unwrap();

        let files = list_media_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("visible.mp4"));
    }
}
