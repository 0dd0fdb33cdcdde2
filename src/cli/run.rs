use crate::batch::BatchEngine;
use crate::config::Config;
use crate::error::Result;
use crate::google::Session;
use crate::models::{RangeUpdate, ValueInputOption};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory whose files are uploaded
    #[arg(long, default_value = "sample")]
    pub dir: PathBuf,

    /// Range to overwrite after uploading
    #[arg(long, default_value = "A1")]
    pub range: String,

    #[arg(long, value_enum, default_value_t = ValueInputOption::UserEntered)]
    pub input_option: ValueInputOption,

    /// Values for the single row written to the sheet
    #[arg(default_values = ["1", "2", "3"])]
    pub values: Vec<String>,
}

impl RunArgs {
    pub(super) fn range_update(&self) -> RangeUpdate {
        RangeUpdate::new(self.range.clone(), vec![self.values.clone()])
            .with_input_option(self.input_option)
    }

    pub async fn execute(&self, config: &Config) -> Result<()> {
        let folder_id = config.google.folder_id()?;
        let sheet_id = config.google.sheet_id()?;

        let session = Session::new(&config.google).await?;
        let engine = BatchEngine::new(session.drive(), session.sheets(), folder_id);
        let report = engine
            .run(&self.dir, sheet_id, &self.range_update())
            .await?;

        info!(
            uploaded = report.uploaded.len(),
            listed = report.listed.len(),
            sheet_updated = report.sheet_update.is_ok(),
            "Run completed"
        );

        Ok(())
    }
}
