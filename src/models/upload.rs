use crate::error::{AppError, Result};
use mime::Mime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A local file queued for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub path: PathBuf,
    pub mime_type: Mime,
}

impl FileUpload {
    /// Describe a local file, guessing its MIME type from the extension.
    ///
    /// Unknown extensions fall back to `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{:?} has no file name", path),
                ))
            })?;

        Ok(Self {
            name,
            path: path.to_path_buf(),
            mime_type: mime_guess::from_path(path).first_or_octet_stream(),
        })
    }
}

/// List the regular files directly inside `dir`, sorted by name.
pub fn scan_directory(dir: impl AsRef<Path>) -> Result<Vec<FileUpload>> {
    let dir = dir.as_ref();
    let mut uploads = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            debug!(path = ?path, "Skipping non-file entry");
            continue;
        }
        uploads.push(FileUpload::from_path(&path)?);
    }

    uploads.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = ?dir, count = uploads.len(), "Scanned directory");

    Ok(uploads)
}

/// Expand a mix of file and directory paths into uploads.
///
/// Directories contribute their direct children; paths that do not exist are an error.
pub fn collect_uploads(paths: &[PathBuf]) -> Result<Vec<FileUpload>> {
    let mut uploads = Vec::new();

    for path in paths {
        if path.is_dir() {
            uploads.extend(scan_directory(path)?);
        } else if path.is_file() {
            uploads.push(FileUpload::from_path(path)?);
        } else {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{:?} is not a file or directory", path),
            )));
        }
    }

    Ok(uploads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_from_extension() {
        let upload = FileUpload::from_path("sample/photo.png").unwrap();

        assert_eq!(upload.name, "photo.png");
        assert_eq!(upload.path, PathBuf::from("sample/photo.png"));
        assert_eq!(upload.mime_type, mime::IMAGE_PNG);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let upload = FileUpload::from_path("sample/data.unknownext").unwrap();
        assert_eq!(upload.mime_type, mime::APPLICATION_OCTET_STREAM);

        let upload = FileUpload::from_path("sample/Makefile").unwrap();
        assert_eq!(upload.mime_type, mime::APPLICATION_OCTET_STREAM);
    }

    #[test]
    fn test_path_without_file_name() {
        assert!(matches!(FileUpload::from_path(".."), Err(AppError::Io(_))));
    }

    #[test]
    fn test_scan_directory_files_only_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "two").unwrap();
        fs::write(dir.path().join("a.csv"), "one").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "three").unwrap();

        let uploads = scan_directory(dir.path()).unwrap();
        let names: Vec<&str> = uploads.iter().map(|u| u.name.as_str()).collect();

        assert_eq!(names, vec!["a.csv", "b.txt"]);
        assert_eq!(uploads[0].mime_type, mime::TEXT_CSV);
        assert_eq!(uploads[1].path, dir.path().join("b.txt"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan_directory(dir.path().join("missing"));

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_collect_uploads_mixes_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("b.md"), "# b").unwrap();
        fs::write(nested.join("a.md"), "# a").unwrap();
        let single = dir.path().join("photo.jpg");
        fs::write(&single, [0xffu8, 0xd8]).unwrap();

        let uploads = collect_uploads(&[single, nested]).unwrap();
        let names: Vec<&str> = uploads.iter().map(|u| u.name.as_str()).collect();

        assert_eq!(names, vec!["photo.jpg", "a.md", "b.md"]);
        assert_eq!(uploads[0].mime_type, mime::IMAGE_JPEG);
    }

    #[test]
    fn test_collect_uploads_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = collect_uploads(&[dir.path().join("nope.txt")]);

        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
