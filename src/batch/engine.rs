use crate::drive::DriveOperations;
use crate::error::{AppError, Result};
use crate::models::{DriveFile, FileUpload, RangeUpdate, scan_directory};
use crate::sheets::SheetOperations;
use indicatif::ProgressStyle;
use std::path::Path;
use tracing::{Span, info, instrument, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunReport {
    pub uploaded: Vec<DriveFile>,
    pub listed: Vec<DriveFile>,
    /// Updated cell count, or the error the Sheets call returned
    pub sheet_update: Result<u32>,
}

pub struct BatchEngine<'a, D, S> {
    drive: &'a D,
    sheets: &'a S,
    folder_id: String,
}

impl<'a, D, S> BatchEngine<'a, D, S>
where
    D: DriveOperations + Sync,
    S: SheetOperations + Sync,
{
    pub fn new(drive: &'a D, sheets: &'a S, folder_id: impl Into<String>) -> Self {
        Self {
            drive,
            sheets,
            folder_id: folder_id.into(),
        }
    }

    /// Upload every file in `dir`, list the folder, then write `update` to `sheet_id`.
    ///
    /// Scan, upload and listing failures abort the run. A failed sheet update
    /// is kept in the report and the run still completes.
    #[instrument(name = "Run", skip_all, fields(dir = ?dir))]
    pub async fn run(
        &self,
        dir: &Path,
        sheet_id: &str,
        update: &RangeUpdate,
    ) -> Result<RunReport> {
        let uploads = scan_directory(dir)?;
        let uploaded = self.upload_all(&uploads).await?;

        let listed = self.drive.list_files(&self.folder_id).await?;

        let sheet_update = self.sheets.update_range(sheet_id, update).await;
        match &sheet_update {
            Ok(cells) => info!(cells, "Sheet updated"),
            Err(e) => warn!(error = %e, "Sheet update failed, continuing"),
        }

        Ok(RunReport {
            uploaded,
            listed,
            sheet_update,
        })
    }

    /// Upload files one at a time, stopping at the first failure.
    #[instrument(name = "Uploading files", skip_all)]
    pub async fn upload_all(&self, uploads: &[FileUpload]) -> Result<Vec<DriveFile>> {
        let span = Span::current();
        span.pb_set_style(
            &ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )
            .map_err(|e| AppError::Other(e.into()))?,
        );
        span.pb_set_message("Uploading");
        span.pb_set_length(uploads.len() as u64);

        let mut uploaded = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let id = self.drive.upload_file(&self.folder_id, upload).await?;
            uploaded.push(DriveFile {
                id,
                name: upload.name.clone(),
            });
            span.pb_inc(1);
        }

        info!(count = uploaded.len(), "Uploads finished");

        Ok(uploaded)
    }
}

#[cfg(test)]
mod mocks {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(crate) struct MockDriveClient {
        pub files: Arc<Mutex<Vec<(String, DriveFile)>>>,
        pub fail_uploads: bool,
    }

    #[async_trait]
    impl DriveOperations for MockDriveClient {
        async fn list_files(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
            let files = self.files.lock().unwrap();
            Ok(files
                .iter()
                .filter(|(parent, _)| parent == folder_id)
                .map(|(_, file)| file.clone())
                .collect())
        }

        async fn upload_file(&self, folder_id: &str, upload: &FileUpload) -> Result<String> {
            if self.fail_uploads {
                return Err(AppError::remote(
                    "Upload file",
                    Some(403),
                    "Insufficient permissions",
                ));
            }
            let mut files = self.files.lock().unwrap();
            let id = format!("file_{}", files.len() + 1);
            files.push((
                folder_id.to_string(),
                DriveFile {
                    id: id.clone(),
                    name: upload.name.clone(),
                },
            ));
            Ok(id)
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct MockSheetsClient {
        pub updates: Arc<Mutex<Vec<(String, RangeUpdate)>>>,
        pub fail: bool,
    }

    #[async_trait]
    impl SheetOperations for MockSheetsClient {
        async fn update_range(&self, sheet_id: &str, update: &RangeUpdate) -> Result<u32> {
            if self.fail {
                return Err(AppError::remote(
                    "Update range",
                    Some(404),
                    "Requested entity was not found.",
                ));
            }
            self.updates
                .lock()
                .unwrap()
                .push((sheet_id.to_string(), update.clone()));
            Ok(update.cell_count() as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{MockDriveClient, MockSheetsClient};
    use super::*;
    use std::fs;

    fn sample_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("blob.zzz"), [0u8, 1, 2]).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_run_uploads_lists_and_updates() {
        let dir = sample_dir();
        let drive = MockDriveClient::default();
        let sheets = MockSheetsClient::default();
        let engine = BatchEngine::new(&drive, &sheets, "folder_1");

        let report = engine
            .run(dir.path(), "sheet_1", &RangeUpdate::default())
            .await
            .unwrap();

        let uploaded: Vec<&str> = report.uploaded.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(uploaded, vec!["blob.zzz", "notes.txt"]);

        let listed: Vec<&str> = report.listed.iter().map(|f| f.name.as_str()).collect();
        assert!(listed.contains(&"notes.txt"));
        assert!(listed.contains(&"blob.zzz"));

        assert_eq!(report.sheet_update.unwrap(), 3);

        let updates = sheets.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "sheet_1");
        assert_eq!(updates[0].1, RangeUpdate::default());
    }

    #[tokio::test]
    async fn test_sheet_failure_is_reported_not_raised() {
        let dir = sample_dir();
        let drive = MockDriveClient::default();
        let sheets = MockSheetsClient {
            fail: true,
            ..Default::default()
        };
        let engine = BatchEngine::new(&drive, &sheets, "folder_1");

        let report = engine
            .run(dir.path(), "missing_sheet", &RangeUpdate::default())
            .await
            .unwrap();

        assert_eq!(report.uploaded.len(), 2);
        assert!(matches!(
            report.sheet_update,
            Err(AppError::Remote {
                status: Some(404),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_empty_directory_lists_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let drive = MockDriveClient::default();
        let sheets = MockSheetsClient::default();
        let engine = BatchEngine::new(&drive, &sheets, "folder_1");

        let report = engine
            .run(dir.path(), "sheet_1", &RangeUpdate::default())
            .await
            .unwrap();

        assert!(report.uploaded.is_empty());
        assert!(report.listed.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_aborts_before_remote_calls() {
        let dir = tempfile::tempdir().unwrap();
        let drive = MockDriveClient::default();
        let sheets = MockSheetsClient::default();
        let engine = BatchEngine::new(&drive, &sheets, "folder_1");

        let result = engine
            .run(&dir.path().join("sample"), "sheet_1", &RangeUpdate::default())
            .await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(drive.files.lock().unwrap().is_empty());
        assert!(sheets.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_run() {
        let dir = sample_dir();
        let drive = MockDriveClient {
            fail_uploads: true,
            ..Default::default()
        };
        let sheets = MockSheetsClient::default();
        let engine = BatchEngine::new(&drive, &sheets, "folder_1");

        let result = engine
            .run(dir.path(), "sheet_1", &RangeUpdate::default())
            .await;

        assert!(matches!(
            result,
            Err(AppError::Remote {
                status: Some(403),
                ..
            })
        ));
        assert!(sheets.updates.lock().unwrap().is_empty());
    }
}
