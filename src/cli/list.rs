use crate::config::Config;
use crate::drive::DriveOperations;
use crate::error::Result;
use crate::google::Session;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let folder_id = config.google.folder_id()?;
        let session = Session::new(&config.google).await?;

        let files = session.drive().list_files(folder_id).await?;
        info!(count = files.len(), folder_id, "Listed folder");

        Ok(())
    }
}
