mod client;

pub use client::DriveClient;

use crate::error::Result;
use crate::models::{DriveFile, FileUpload};
use async_trait::async_trait;

#[async_trait]
pub trait DriveOperations {
    /// List the direct children of a folder. An empty folder yields an empty list.
    async fn list_files(&self, folder_id: &str) -> Result<Vec<DriveFile>>;

    /// Upload a local file into a folder and return the new file's ID.
    async fn upload_file(&self, folder_id: &str, upload: &FileUpload) -> Result<String>;
}
