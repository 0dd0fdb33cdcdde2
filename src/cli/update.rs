use crate::config::Config;
use crate::error::Result;
use crate::google::Session;
use crate::models::{RangeUpdate, ValueInputOption};
use crate::sheets::SheetOperations;
use clap::Args;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Range to overwrite, e.g. `A1` or `Sheet1!A1:C1`
    #[arg(long)]
    pub range: String,

    #[arg(long, value_enum, default_value_t = ValueInputOption::UserEntered)]
    pub input_option: ValueInputOption,

    #[arg(required = true)]
    pub values: Vec<String>,
}

impl UpdateArgs {
    pub(super) fn range_update(&self) -> RangeUpdate {
        RangeUpdate::new(self.range.clone(), vec![self.values.clone()])
            .with_input_option(self.input_option)
    }

    pub async fn execute(&self, config: &Config) -> Result<()> {
        let sheet_id = config.google.sheet_id()?;
        let session = Session::new(&config.google).await?;

        session
            .sheets()
            .update_range(sheet_id, &self.range_update())
            .await?;

        Ok(())
    }
}
