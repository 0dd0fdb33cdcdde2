use super::SheetOperations;
use crate::error::Result;
use crate::google::{Connector, api_error};
use crate::models::RangeUpdate;
use async_trait::async_trait;
use google_sheets4::api::{Scope, Sheets, ValueRange};
use tracing::{debug, info, instrument, warn};

const AUTH_SCOPE: Scope = Scope::Spreadsheet;

pub struct SheetsClient {
    hub: Sheets<Connector>,
}

impl SheetsClient {
    pub(crate) fn new(hub: Sheets<Connector>) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl SheetOperations for SheetsClient {
    #[instrument(name = "Updating range", skip(self, update), fields(range = %update.range))]
    async fn update_range(&self, sheet_id: &str, update: &RangeUpdate) -> Result<u32> {
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(update.range.clone()),
            values: Some(update.to_values()),
        };

        debug!(cells = update.cell_count(), "Writing values");

        let result = self
            .hub
            .spreadsheets()
            .values_update(value_range, sheet_id, &update.range)
            .value_input_option(update.input_option.as_str())
            .add_scope(AUTH_SCOPE)
            .doit()
            .await;

        match result {
            Ok((_, response)) => {
                let cells = response
                    .updated_cells
                    .and_then(|cells| u32::try_from(cells).ok())
                    .unwrap_or_default();
                info!(cells, "Cells updated");
                Ok(cells)
            }
            Err(e) => {
                let err = api_error("Update range", e);
                warn!(error = %err, "Range update failed");
                Err(err)
            }
        }
    }
}
