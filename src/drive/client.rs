use super::DriveOperations;
use crate::error::{AppError, Result};
use crate::google::{Connector, api_error};
use crate::models::{DriveFile, FileUpload};
use async_trait::async_trait;
use google_drive3::api::{DriveHub, File, Scope};
use tracing::{info, instrument};

// Uploads go into folders shared with the service account, not created by it
const AUTH_SCOPE: Scope = Scope::Full;

const LIST_FIELDS: &str = "nextPageToken, files(id, name)";

pub struct DriveClient {
    hub: DriveHub<Connector>,
}

impl DriveClient {
    pub(crate) fn new(hub: DriveHub<Connector>) -> Self {
        Self { hub }
    }
}

/// Query matching the direct children of `folder_id`.
fn children_query(folder_id: &str) -> String {
    let escaped = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents", escaped)
}

#[async_trait]
impl DriveOperations for DriveClient {
    #[instrument(name = "Listing folder", skip(self))]
    async fn list_files(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
        let query = children_query(folder_id);
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .hub
                .files()
                .list()
                .q(&query)
                .param("fields", LIST_FIELDS)
                .add_scope(AUTH_SCOPE);
            if let Some(token) = &page_token {
                request = request.page_token(token);
            }

            let (_, file_list) = request
                .doit()
                .await
                .map_err(|e| api_error("List files", e))?;

            files.extend(
                file_list
                    .files
                    .unwrap_or_default()
                    .into_iter()
                    .map(DriveFile::from),
            );

            page_token = file_list.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        if files.is_empty() {
            info!("No files found");
        }
        for file in &files {
            info!(id = %file.id, name = %file.name, "Found file");
        }

        Ok(files)
    }

    #[instrument(name = "Uploading file", skip(self, upload), fields(name = %upload.name))]
    async fn upload_file(&self, folder_id: &str, upload: &FileUpload) -> Result<String> {
        let metadata = File {
            name: Some(upload.name.clone()),
            parents: Some(vec![folder_id.to_string()]),
            ..Default::default()
        };

        let content = std::fs::File::open(&upload.path)?;

        let (_, file) = self
            .hub
            .files()
            .create(metadata)
            .param("fields", "id")
            .add_scope(AUTH_SCOPE)
            .upload(content, upload.mime_type.clone())
            .await
            .map_err(|e| api_error("Upload file", e))?;

        let id = file
            .id
            .ok_or_else(|| AppError::remote("Upload file", None, "Created file has empty ID"))?;

        info!(id = %id, mime_type = %upload.mime_type, "File uploaded");

        Ok(id)
    }
}
