use crate::batch::BatchEngine;
use crate::config::Config;
use crate::error::Result;
use crate::google::Session;
use crate::models::collect_uploads;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Files or directories to upload
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl UploadArgs {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let folder_id = config.google.folder_id()?;
        let uploads = collect_uploads(&self.paths)?;

        let session = Session::new(&config.google).await?;
        BatchEngine::new(session.drive(), session.sheets(), folder_id)
            .upload_all(&uploads)
            .await?;

        Ok(())
    }
}
